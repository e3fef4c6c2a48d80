use math::{Quaternion, Vector};

/// Sphere that is recomputed from its original points for every scale.
#[derive(Clone, Debug)]
pub struct ScaledSphere {
	original: Vec<Vector<3, f32>>,
	rotation: Quaternion<f32>,
}

impl ScaledSphere {
	pub fn new(original: Vec<Vector<3, f32>>) -> Self {
		Self { original, rotation: Quaternion::IDENTITY }
	}

	/// Rotation applied after scaling, normalized before use.
	pub fn with_rotation(mut self, rotation: Quaternion<f32>) -> Self {
		self.rotation = rotation.normalized();
		self
	}

	pub fn rotation(&self) -> Quaternion<f32> {
		self.rotation
	}

	pub fn len(&self) -> usize {
		self.original.len()
	}

	pub fn is_empty(&self) -> bool {
		self.original.is_empty()
	}

	pub fn points(&self, scale: f32) -> Vec<Vector<3, f32>> {
		self.original
			.iter()
			.map(|&point| self.rotation * (point * scale))
			.collect()
	}
}
