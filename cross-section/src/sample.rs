use math::{Vector, Z};
use rayon::prelude::*;
use serde::Serialize;

use crate::{Color, Error, Gradient};

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColoredPoint {
	pub position: Vector<3, f32>,
	pub color: Color,
}

impl ColoredPoint {
	pub fn height(&self) -> f32 {
		self.position[Z]
	}
}

/// Samples a sphere centered at the origin on a regular `(u, v)` grid.
///
/// `u` runs around the z axis from `0` to `τ`, `v` from the south pole (`v = 0`)
/// to the north pole (`v = π`), both ends included. Points are ordered u-major.
#[derive(Clone, Copy, Debug)]
pub struct SphereSampler {
	radius: f32,
	resolution: (usize, usize),
}

impl SphereSampler {
	pub fn new(radius: f32, resolution: (usize, usize)) -> Result<Self, Error> {
		if !(radius > 0.0 && radius.is_finite()) {
			return Err(Error::InvalidRadius(radius));
		}
		if resolution.0 < 2 || resolution.1 < 2 {
			return Err(Error::InvalidResolution(resolution.0, resolution.1));
		}
		Ok(Self { radius, resolution })
	}

	pub fn radius(&self) -> f32 {
		self.radius
	}

	pub fn len(&self) -> usize {
		self.resolution.0 * self.resolution.1
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn sample(&self) -> Vec<Vector<3, f32>> {
		let (nu, nv) = self.resolution;
		let radius = self.radius as f64;
		let du = std::f64::consts::TAU / (nu - 1) as f64;
		let dv = std::f64::consts::PI / (nv - 1) as f64;
		(0..self.len())
			.into_par_iter()
			.map(|index| {
				let u = (index / nv) as f64 * du;
				let v = (index % nv) as f64 * dv;
				Vector::new([
					(radius * u.cos() * v.sin()) as f32,
					(radius * u.sin() * v.sin()) as f32,
					(-radius * v.cos()) as f32,
				])
			})
			.collect()
	}

	/// Samples the sphere and colors the points by sample index.
	pub fn sample_colored(&self, gradient: &Gradient) -> Vec<ColoredPoint> {
		let points = self.sample();
		let colors = gradient.sample(points.len());
		points
			.into_iter()
			.zip(colors)
			.map(|(position, color)| ColoredPoint { position, color })
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use math::{X, Y};

	use super::*;

	#[test]
	fn rejects_small_resolution() {
		assert_eq!(
			SphereSampler::new(1.0, (1, 10)).unwrap_err(),
			Error::InvalidResolution(1, 10)
		);
		assert!(SphereSampler::new(1.0, (10, 0)).is_err());
		assert_eq!(
			SphereSampler::new(0.0, (10, 10)).unwrap_err(),
			Error::InvalidRadius(0.0)
		);
		assert!(SphereSampler::new(f32::NAN, (10, 10)).is_err());
	}

	#[test]
	fn points_on_sphere() {
		let sampler = SphereSampler::new(2.0, (17, 9)).unwrap();
		let points = sampler.sample();
		assert_eq!(points.len(), 17 * 9);
		for point in points {
			assert!((point.length() - 2.0).abs() < 1e-5);
		}
	}

	#[test]
	fn grid_order() {
		let sampler = SphereSampler::new(1.0, (5, 3)).unwrap();
		let points = sampler.sample();
		// first column walks from the south pole over the equator to the north pole
		assert!((points[0][Z] + 1.0).abs() < 1e-6);
		assert!(points[1][Z].abs() < 1e-6);
		assert!((points[1][X] - 1.0).abs() < 1e-6);
		assert!((points[2][Z] - 1.0).abs() < 1e-6);
		// second column is a quarter turn further
		assert!((points[4][Y] - 1.0).abs() < 1e-6);
	}

	#[test]
	fn colored_by_index() {
		let sampler = SphereSampler::new(1.0, (4, 4)).unwrap();
		let points = sampler.sample_colored(&Gradient::default());
		assert_eq!(points.len(), 16);
		assert_eq!(points[0].color, Color::RED);
		assert_eq!(points[15].color, Color::RED);
		assert_eq!(points[5].color, Color::BLUE);
		assert_eq!(points[3].position, sampler.sample()[3]);
	}
}
