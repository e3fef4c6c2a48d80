mod hypersphere;
mod progress;
mod quat;
mod slice;

use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
	str::FromStr,
};

use serde::Serialize;

pub use hypersphere::HypersphereCommand;
pub use quat::QuatCommand;
pub use slice::SliceCommand;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	CrossSection(#[from] cross_section::Error),

	#[error(transparent)]
	IO(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error("Expected 8 values for two quaternions, got {0}")]
	QuaternionValues(usize),

	#[error("Rotation axis needs 3 values and a non zero length, got {0:?}")]
	InvalidAxis(Vec<f32>),
}

#[derive(clap::Parser)]
#[command(name = "sphere-viz")]
pub enum Command {
	/// Sweep a slicing plane through a sampled sphere
	Slice(SliceCommand),
	/// Scale a sampled sphere
	Hypersphere(HypersphereCommand),
	/// Multiply two quaternions
	Quat(QuatCommand),
}

impl Command {
	pub fn run(self) -> Result<(), Error> {
		match self {
			Self::Slice(command) => {
				let statistics = slice::run(command)?;
				log::info!(
					"Cross section shown in {} of {} frames",
					statistics.hits,
					statistics.frames
				);
			},
			Self::Hypersphere(command) => {
				let statistics = hypersphere::run(command)?;
				log::info!(
					"Scaled {} points over {} frames",
					statistics.samples,
					statistics.frames
				);
			},
			Self::Quat(command) => {
				quat::run(command)?;
			},
		}
		Ok(())
	}
}

/// Sample counts around and along the sphere, written as `UxV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Resolution(pub usize, pub usize);

impl FromStr for Resolution {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (u, v) = s
			.split_once('x')
			.ok_or_else(|| format!("expected UxV, got '{}'", s))?;
		let parse = |value: &str| {
			value
				.trim()
				.parse::<usize>()
				.map_err(|err| format!("invalid sample count '{}': {}", value, err))
		};
		Ok(Self(parse(u)?, parse(v)?))
	}
}

impl std::fmt::Display for Resolution {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}x{}", self.0, self.1)
	}
}

fn save(path: &Path, document: &impl Serialize) -> Result<(), Error> {
	let mut writer = BufWriter::new(File::create(path)?);
	serde_json::to_writer_pretty(&mut writer, document)?;
	writer.flush()?;
	log::info!("Saved {}", path.display());
	Ok(())
}
