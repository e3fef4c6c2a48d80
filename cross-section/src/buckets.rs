use std::collections::HashMap;

use crate::{ColoredPoint, HeightKey};

/// Points grouped by their rounded height.
///
/// Heights are divided by `divisor` before rounding, `1.0` buckets by absolute height and the
/// sphere radius buckets by relative height. Every bucket holds atleast one point, in sample order.
#[derive(Debug)]
pub struct HeightBuckets {
	precision: u32,
	divisor: f64,
	buckets: HashMap<HeightKey, Vec<ColoredPoint>>,
}

impl HeightBuckets {
	pub fn new(points: impl IntoIterator<Item = ColoredPoint>, precision: u32, divisor: f64) -> Self {
		let mut buckets = Self { precision, divisor, buckets: HashMap::new() };
		let mut skipped = 0usize;
		for point in points {
			match buckets.key(point.height() as f64) {
				Some(key) => buckets.buckets.entry(key).or_default().push(point),
				None => skipped += 1,
			}
		}
		if skipped > 0 {
			log::warn!("Skipped {} points without a valid height", skipped);
		}
		buckets
	}

	pub fn key(&self, height: f64) -> Option<HeightKey> {
		HeightKey::new(height / self.divisor, self.precision)
	}

	/// Points with the same rounded height as `height`.
	pub fn get(&self, height: f64) -> Option<&[ColoredPoint]> {
		self.bucket(self.key(height)?)
	}

	pub fn bucket(&self, key: HeightKey) -> Option<&[ColoredPoint]> {
		self.buckets.get(&key).map(Vec::as_slice)
	}

	/// All keys in ascending order.
	pub fn keys(&self) -> Vec<HeightKey> {
		let mut keys = self.buckets.keys().copied().collect::<Vec<_>>();
		keys.sort_unstable();
		keys
	}

	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}

	pub fn point_count(&self) -> usize {
		self.buckets.values().map(Vec::len).sum()
	}
}

#[cfg(test)]
mod tests {
	use math::Vector;

	use super::*;
	use crate::Color;

	fn point(z: f32, color: Color) -> ColoredPoint {
		ColoredPoint { position: Vector::new([0.0, 0.0, z]), color }
	}

	#[test]
	fn groups_by_rounded_height() {
		let points = [
			point(0.501, Color::RED),
			point(-0.2, Color::BLUE),
			point(0.499, Color::GREEN),
			point(0.52, Color::RED),
		];
		let buckets = HeightBuckets::new(points, 2, 1.0);
		assert_eq!(buckets.len(), 3);
		assert_eq!(buckets.point_count(), 4);
		assert_eq!(buckets.get(0.5), Some(&[points[0], points[2]][..]));
		assert_eq!(buckets.get(-0.2), Some(&[points[1]][..]));
		assert_eq!(buckets.get(0.51), None);
	}

	#[test]
	fn keys_sorted_and_consistent() {
		let points = (0..50).map(|i| point((i as f32 * 0.37).sin(), Color::RED)).collect::<Vec<_>>();
		let buckets = HeightBuckets::new(points.iter().copied(), 2, 1.0);
		let keys = buckets.keys();
		assert!(keys.windows(2).all(|w| w[0] < w[1]));
		for key in keys {
			let bucket = buckets.bucket(key).unwrap();
			assert!(!bucket.is_empty());
			for p in bucket {
				assert_eq!(HeightKey::new(p.height() as f64, 2), Some(key));
			}
		}
	}

	#[test]
	fn divisor_scales_heights() {
		let points = [point(1.0, Color::RED), point(-2.0, Color::BLUE)];
		let buckets = HeightBuckets::new(points, 2, 2.0);
		assert_eq!(buckets.get(1.0), Some(&[points[0]][..]));
		assert_eq!(buckets.bucket(HeightKey::new(0.5, 2).unwrap()), Some(&[points[0]][..]));
		assert_eq!(buckets.get(-2.0), Some(&[points[1]][..]));
	}

	#[test]
	fn skips_invalid_heights() {
		let points = [point(f32::NAN, Color::RED), point(0.0, Color::RED)];
		let buckets = HeightBuckets::new(points, 2, 1.0);
		assert_eq!(buckets.point_count(), 1);
		assert!(!buckets.is_empty());
	}
}
