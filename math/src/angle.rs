use serde::{Deserialize, Serialize};

use crate::requirements::{FromF64, SinCos};

/// Rotation angle, stored in radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle<T> {
	radians: T,
}

impl<T> Angle<T> {
	pub const fn from_radians(radians: T) -> Self {
		Self { radians }
	}

	pub fn radians(self) -> T {
		self.radians
	}
}

impl<T> Angle<T>
where
	T: FromF64 + std::ops::Mul<Output = T>,
{
	pub fn from_degrees(degrees: T) -> Self {
		Self::from_radians(degrees * T::from_f64(std::f64::consts::PI / 180.0))
	}

	/// `(sin, cos)` of half the angle, the scalar parts of a rotation quaternion.
	pub fn half_sin_cos(self) -> (T, T)
	where
		T: SinCos,
	{
		(self.radians * T::from_f64(0.5)).sin_cos()
	}
}
