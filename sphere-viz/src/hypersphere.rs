use std::path::PathBuf;

use cross_section::{ScaledSphere, SphereSampler, Tween};
use math::{Angle, Quaternion, Vector};
use serde::Serialize;

use crate::{progress::Progress, Error, Resolution};

#[derive(clap::Args)]
pub struct HypersphereCommand {
	/// Samples around and along the sphere
	#[arg(long, default_value_t = Resolution(101, 51))]
	pub resolution: Resolution,

	/// Radius of the sphere before scaling
	#[arg(long, default_value_t = 1.0)]
	pub radius: f32,

	/// Scale at the start
	#[arg(long, default_value_t = 1.0)]
	pub from: f64,

	/// Scale at the end
	#[arg(long, default_value_t = 2.0)]
	pub to: f64,

	/// Duration of the scaling in seconds
	#[arg(long, default_value_t = 2.0)]
	pub duration: f64,

	/// Frames per second
	#[arg(long, default_value_t = 30.0)]
	pub fps: f64,

	/// Rotate the sphere by the quaternion (0.5, 0.5, 0.5, 0.5)
	#[arg(long, conflicts_with = "axis")]
	pub rotate: bool,

	/// Rotate the sphere around the axis X Y Z
	#[arg(long, num_args = 3, allow_negative_numbers = true, requires = "angle")]
	pub axis: Option<Vec<f32>>,

	/// Rotation angle around the axis in degrees
	#[arg(long, allow_negative_numbers = true, requires = "axis")]
	pub angle: Option<f32>,

	/// Output file for the frames as JSON
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Include the points of every frame in the output
	#[arg(long)]
	pub points: bool,
}

#[derive(Default, Debug, Serialize)]
pub struct Statistics {
	pub samples: usize,
	pub frames: usize,
	pub time: f32,
}

#[derive(Serialize)]
struct Frame {
	index: usize,
	scale: f64,
	extent: f32,
	#[serde(skip_serializing_if = "Option::is_none")]
	points: Option<Vec<Vector<3, f32>>>,
}

#[derive(Serialize)]
struct Document<'a> {
	resolution: Resolution,
	radius: f32,
	rotation: Quaternion<f32>,
	statistics: &'a Statistics,
	frames: Vec<Frame>,
}

pub fn run(command: HypersphereCommand) -> Result<Statistics, Error> {
	let mut statistics = Statistics::default();
	let sampler = SphereSampler::new(command.radius, (command.resolution.0, command.resolution.1))?;
	let mut sphere = ScaledSphere::new(sampler.sample());
	if let Some(rotation) = rotation(&command)? {
		sphere = sphere.with_rotation(rotation);
	}
	statistics.samples = sphere.len();

	let tween = Tween::new(command.from, command.to, command.duration, command.fps)?;
	let mut frames = Vec::with_capacity(tween.frame_count());
	let mut progress = Progress::new("Scale", tween.frame_count());
	for (index, scale) in tween.values().enumerate() {
		let points = sphere.points(scale as f32);
		let extent = points.iter().map(|p| p.length()).fold(0.0f32, f32::max);
		frames.push(Frame {
			index,
			scale,
			extent,
			points: command.points.then_some(points),
		});
		progress.step();
	}
	statistics.frames = frames.len();
	statistics.time = progress.finish();

	if let Some(path) = command.output {
		let document = Document {
			resolution: command.resolution,
			radius: command.radius,
			rotation: sphere.rotation(),
			statistics: &statistics,
			frames,
		};
		crate::save(&path, &document)?;
	}

	Ok(statistics)
}

fn rotation(command: &HypersphereCommand) -> Result<Option<Quaternion<f32>>, Error> {
	if command.rotate {
		return Ok(Some(Quaternion::new(0.5, 0.5, 0.5, 0.5)));
	}
	let (Some(axis), Some(angle)) = (&command.axis, command.angle) else {
		return Ok(None);
	};
	let &[x, y, z] = &axis[..] else {
		return Err(Error::InvalidAxis(axis.clone()));
	};
	let axis = Vector::new([x, y, z]);
	if !(axis.length() > 0.0 && axis.length().is_finite()) {
		return Err(Error::InvalidAxis(axis.data().to_vec()));
	}
	Ok(Some(Quaternion::from_axis_angle(axis, Angle::from_degrees(angle))))
}
