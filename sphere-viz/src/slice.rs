use std::path::PathBuf;

use cross_section::{Color, DisplayPoint, Extractor, Gradient, HeightKey, Settings, Slice, SphereSampler, Tween};
use serde::Serialize;

use crate::{
	progress::{Progress, Stage},
	Error, Resolution,
};

#[derive(clap::Args)]
pub struct SliceCommand {
	#[command(flatten)]
	pub settings: Settings,

	/// Samples around and along the sphere
	#[arg(long, default_value_t = Resolution(500, 500))]
	pub resolution: Resolution,

	/// Duration of the sweep from the bottom to the top in seconds
	#[arg(long, default_value_t = 10.0)]
	pub duration: f64,

	/// Frames per second
	#[arg(long, default_value_t = 30.0)]
	pub fps: f64,

	/// Gradient colors as #RRGGBB, red blue green red if not specified
	#[arg(long, num_args = 1..)]
	pub colors: Vec<Color>,

	/// Output file for the frames as JSON
	#[arg(long, short)]
	pub output: Option<PathBuf>,

	/// Include the displayed points of every frame in the output
	#[arg(long)]
	pub points: bool,
}

#[derive(Default, Debug, Serialize)]
pub struct Statistics {
	pub samples: usize,
	pub heights: usize,
	pub frames: usize,
	pub hits: usize,
	pub misses: usize,
	pub times: Times,
}

#[derive(Default, Debug, Serialize)]
pub struct Times {
	pub sample: f32,
	pub group: f32,
	pub sweep: f32,
}

#[derive(Serialize)]
struct Frame {
	index: usize,
	cursor: f64,
	key: Option<HeightKey>,
	hit: bool,
	points: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	display: Option<Vec<DisplayPoint>>,
}

#[derive(Serialize)]
struct Document<'a> {
	settings: &'a Settings,
	resolution: Resolution,
	duration: f64,
	fps: f64,
	statistics: &'a Statistics,
	frames: Vec<Frame>,
}

pub fn run(command: SliceCommand) -> Result<Statistics, Error> {
	let mut statistics = Statistics::default();
	let settings = command.settings;

	let stage = Stage::new("Sample");
	let sampler = SphereSampler::new(settings.radius, (command.resolution.0, command.resolution.1))?;
	let gradient = if command.colors.is_empty() {
		Gradient::default()
	} else {
		Gradient::new(command.colors)?
	};
	let points = sampler.sample_colored(&gradient);
	statistics.samples = points.len();
	statistics.times.sample = stage.finish();

	let stage = Stage::new("Group");
	let extractor = Extractor::new(points, settings.clone())?;
	statistics.heights = extractor.len();
	statistics.times.group = stage.finish();

	let radius = settings.radius as f64;
	let tween = Tween::new(-radius, radius, command.duration, command.fps)?;
	let mut slice = Slice::new(&extractor);
	let mut frames = Vec::with_capacity(tween.frame_count());

	let mut progress = Progress::new("Sweep", tween.frame_count());
	for (index, cursor) in tween.values().enumerate() {
		let hit = slice.update(cursor);
		if hit {
			statistics.hits += 1;
		} else {
			statistics.misses += 1;
		}
		frames.push(Frame {
			index,
			cursor,
			key: extractor.key(cursor),
			hit,
			points: slice.display().len(),
			display: command.points.then(|| slice.display().to_vec()),
		});
		progress.step();
	}
	statistics.frames = frames.len();
	statistics.times.sweep = progress.finish();

	if let Some(path) = command.output {
		let document = Document {
			settings: &settings,
			resolution: command.resolution,
			duration: command.duration,
			fps: command.fps,
			statistics: &statistics,
			frames,
		};
		crate::save(&path, &document)?;
	}

	Ok(statistics)
}
