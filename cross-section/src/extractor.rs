use serde::{Deserialize, Serialize};

use crate::{ColoredPoint, DisplayPoint, Error, HeightBuckets, HeightKey, MAX_PRECISION};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
	/// Project the cross section onto the xy plane
	#[default]
	Flat,
	/// Keep the height of the cross section
	Spatial,
}

#[derive(clap::Args, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
	/// Radius of the sphere
	#[arg(long, default_value_t = 1.0)]
	pub radius: f32,

	/// Decimal digits the heights are rounded to
	#[arg(long, default_value_t = 2)]
	pub precision: u32,

	/// Divide heights and cursor by the radius before rounding
	#[arg(long)]
	pub normalize: bool,

	/// Radius of the displayed points
	#[arg(long, default_value_t = 0.02)]
	pub dot_radius: f32,

	/// Projection of the displayed cross section
	#[arg(long, value_enum, default_value_t = Projection::Flat)]
	pub projection: Projection,

	/// Log cursor values without a cross section
	#[arg(long)]
	pub log_misses: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			radius: 1.0,
			precision: 2,
			normalize: false,
			dot_radius: 0.02,
			projection: Projection::Flat,
			log_misses: false,
		}
	}
}

/// Finds the points of a sampled sphere at the height of a slicing plane.
#[derive(Debug)]
pub struct Extractor {
	settings: Settings,
	buckets: HeightBuckets,
	sample_count: usize,
}

impl Extractor {
	pub fn new(points: Vec<ColoredPoint>, settings: Settings) -> Result<Self, Error> {
		if !(settings.radius > 0.0 && settings.radius.is_finite()) {
			return Err(Error::InvalidRadius(settings.radius));
		}
		if settings.precision > MAX_PRECISION {
			return Err(Error::InvalidPrecision(settings.precision));
		}
		let divisor = if settings.normalize { settings.radius as f64 } else { 1.0 };
		let sample_count = points.len();
		let buckets = HeightBuckets::new(points, settings.precision, divisor);
		log::info!(
			"Grouped {} points into {} heights",
			sample_count,
			buckets.len()
		);
		Ok(Self { settings, buckets, sample_count })
	}

	/// Cross section at `cursor`.
	///
	/// `None` if no sampled point rounds to the same height. This is the expected outcome for most
	/// cursor values of a continuous sweep, callers keep whatever they displayed before.
	pub fn query(&self, cursor: f64) -> Option<Vec<DisplayPoint>> {
		let Some(points) = self.buckets.get(cursor) else {
			if self.settings.log_misses {
				log::info!("No cross section at z = {:.4}", cursor);
			}
			return None;
		};
		Some(
			points
				.iter()
				.map(|point| DisplayPoint::new(point, self.settings.projection, self.settings.dot_radius))
				.collect(),
		)
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn key(&self, cursor: f64) -> Option<HeightKey> {
		self.buckets.key(cursor)
	}

	pub fn keys(&self) -> Vec<HeightKey> {
		self.buckets.keys()
	}

	pub fn bucket(&self, key: HeightKey) -> Option<&[ColoredPoint]> {
		self.buckets.bucket(key)
	}

	/// Number of distinct heights.
	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	pub fn sample_count(&self) -> usize {
		self.sample_count
	}
}
