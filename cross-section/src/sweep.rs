use crate::{DisplayPoint, Error, Extractor};

/// Upper bound for the frames of a single sweep.
pub const MAX_FRAMES: usize = 1 << 20;

/// Linear interpolation of a scalar from `from` to `to` sampled at a fixed frame rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
	from: f64,
	to: f64,
	steps: usize,
}

impl Tween {
	pub fn new(from: f64, to: f64, duration: f64, fps: f64) -> Result<Self, Error> {
		if !(fps > 0.0 && fps.is_finite()) {
			return Err(Error::InvalidFps(fps));
		}
		if !(duration >= 0.0 && duration.is_finite()) {
			return Err(Error::InvalidDuration(duration));
		}
		let steps = (duration * fps).round().max(1.0);
		if steps >= MAX_FRAMES as f64 {
			return Err(Error::TooManyFrames(duration));
		}
		Ok(Self { from, to, steps: steps as usize })
	}

	/// Frames including the first and the last value.
	pub fn frame_count(&self) -> usize {
		self.steps + 1
	}

	pub fn value(&self, frame: usize) -> f64 {
		let alpha = frame.min(self.steps) as f64 / self.steps as f64;
		self.from * (1.0 - alpha) + self.to * alpha
	}

	pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
		(0..self.frame_count()).map(|frame| self.value(frame))
	}
}

/// Cross section shown while the slicing plane moves, updated once per frame.
pub struct Slice<'a> {
	extractor: &'a Extractor,
	display: Vec<DisplayPoint>,
}

impl<'a> Slice<'a> {
	pub fn new(extractor: &'a Extractor) -> Self {
		Self { extractor, display: Vec::new() }
	}

	/// Moves the plane to `cursor`. Returns `false` and keeps the previous display if there is
	/// no cross section at `cursor`.
	pub fn update(&mut self, cursor: f64) -> bool {
		match self.extractor.query(cursor) {
			Some(display) => {
				self.display = display;
				true
			},
			None => false,
		}
	}

	pub fn display(&self) -> &[DisplayPoint] {
		&self.display
	}
}
