use math::{X, Y, Z};
use serde::Serialize;

use crate::{ColoredPoint, Projection};

/// Point ready for a renderer, layout matches a `vec3 position, float radius, vec4 color` vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DisplayPoint {
	pub position: [f32; 3],
	pub radius: f32,
	pub color: [f32; 4],
}

static_assertions::assert_eq_size!(DisplayPoint, [u8; 32]);

impl DisplayPoint {
	pub fn new(point: &ColoredPoint, projection: Projection, radius: f32) -> Self {
		let z = match projection {
			Projection::Flat => 0.0,
			Projection::Spatial => point.position[Z],
		};
		Self {
			position: [point.position[X], point.position[Y], z],
			radius,
			color: point.color.to_array(),
		}
	}
}

#[cfg(test)]
mod tests {
	use math::Vector;

	use super::*;
	use crate::Color;

	#[test]
	fn projection() {
		let point = ColoredPoint {
			position: Vector::new([0.6, 0.0, 0.8]),
			color: Color::GREEN,
		};
		let flat = DisplayPoint::new(&point, Projection::Flat, 0.02);
		assert_eq!(flat.position, [0.6, 0.0, 0.0]);
		assert_eq!(flat.radius, 0.02);
		assert_eq!(flat.color, Color::GREEN.to_array());

		let spatial = DisplayPoint::new(&point, Projection::Spatial, 0.03);
		assert_eq!(spatial.position, [0.6, 0.0, 0.8]);
		assert_eq!(spatial.radius, 0.03);
	}

	#[test]
	fn byte_layout() {
		let point = DisplayPoint {
			position: [1.0, 2.0, 3.0],
			radius: 0.5,
			color: [0.0; 4],
		};
		let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&point));
		assert_eq!(&floats[..4], &[1.0, 2.0, 3.0, 0.5]);
	}
}
