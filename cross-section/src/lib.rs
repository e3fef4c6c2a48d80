mod buckets;
mod color;
mod display;
mod extractor;
mod key;
mod sample;
mod scaled;
mod sweep;

pub use buckets::HeightBuckets;
pub use color::{Color, Gradient};
pub use display::DisplayPoint;
pub use extractor::{Extractor, Projection, Settings};
pub use key::{HeightKey, MAX_PRECISION};
pub use sample::{ColoredPoint, SphereSampler};
pub use scaled::ScaledSphere;
pub use sweep::{Slice, Tween, MAX_FRAMES};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
	#[error("Resolution {0}x{1} is too small, atleast 2 samples per direction are required")]
	InvalidResolution(usize, usize),

	#[error("Gradient requires atleast one color")]
	EmptyGradient,

	#[error("Invalid color '{0}', expected #RRGGBB")]
	InvalidColor(String),

	#[error("Radius must be positive, got {0}")]
	InvalidRadius(f32),

	#[error("Frames per second must be positive, got {0}")]
	InvalidFps(f64),

	#[error("Duration must be finite and not negative, got {0}")]
	InvalidDuration(f64),

	#[error("Sweep of {0:e} seconds needs more than {max} frames", max = MAX_FRAMES)]
	TooManyFrames(f64),

	#[error("Precision {0} is too high, atmost {max} decimal digits are supported", max = MAX_PRECISION)]
	InvalidPrecision(u32),
}
