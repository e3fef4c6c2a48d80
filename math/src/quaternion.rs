use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::{
	angle::Angle,
	requirements::{FromF64, Identity, SinCos, Sqrt, Zero},
	vector::Vector,
	X, Y, Z,
};

/// Quaternion `w + xi + yj + zk`.
///
/// Rotations are expected to be unit quaternions, but nothing enforces it.
/// Normalize with [`Quaternion::normalized`] where a unit quaternion is required.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion<T> {
	pub w: T,
	pub x: T,
	pub y: T,
	pub z: T,
}

impl<T> Quaternion<T> {
	pub const fn new(w: T, x: T, y: T, z: T) -> Self {
		Self { w, x, y, z }
	}
}

impl<T> Quaternion<T>
where
	T: Identity + Zero,
{
	pub const IDENTITY: Self = Self {
		w: T::IDENTITY,
		x: T::ZERO,
		y: T::ZERO,
		z: T::ZERO,
	};
}

impl<T> Quaternion<T>
where
	T: Copy,
	T: Zero,
	T: Add<T, Output = T>,
	T: Mul<T, Output = T>,
	T: Div<T, Output = T>,
	T: Neg<Output = T>,
	T: Sqrt,
{
	pub fn conjugate(self) -> Self {
		Self::new(self.w, -self.x, -self.y, -self.z)
	}

	pub fn norm_squared(self) -> T {
		self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
	}

	pub fn norm(self) -> T {
		self.norm_squared().sqrt()
	}

	/// Components are not finite for the zero quaternion.
	pub fn normalized(self) -> Self {
		let norm = self.norm();
		Self::new(self.w / norm, self.x / norm, self.y / norm, self.z / norm)
	}

	/// Rotation around `axis` by `angle`, the axis does not need to be normalized.
	///
	/// Components are not finite for the zero axis.
	pub fn from_axis_angle(axis: Vector<3, T>, angle: Angle<T>) -> Self
	where
		T: FromF64,
		T: SinCos,
	{
		let axis = axis.normalized();
		let (sin, cos) = angle.half_sin_cos();
		Self::new(cos, axis[X] * sin, axis[Y] * sin, axis[Z] * sin)
	}
}

/// Hamilton product.
impl<T> Mul for Quaternion<T>
where
	T: Copy,
	T: Add<T, Output = T>,
	T: Sub<T, Output = T>,
	T: Mul<T, Output = T>,
{
	type Output = Self;

	fn mul(self, rhs: Self) -> Self::Output {
		let Self { w: w1, x: x1, y: y1, z: z1 } = self;
		let Self { w: w2, x: x2, y: y2, z: z2 } = rhs;
		Self {
			w: w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
			x: w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
			y: w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
			z: w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
		}
	}
}

/// Rotates `vec`, same result as `q * (0, vec) * q.conjugate()` for a unit quaternion.
impl<T> Mul<Vector<3, T>> for Quaternion<T>
where
	T: FromF64,
	T: Identity,
	T: Copy,
	T: Add<T, Output = T>,
	T: Sub<T, Output = T>,
	T: Mul<T, Output = T>,
{
	type Output = Vector<3, T>;

	fn mul(self, vec: Vector<3, T>) -> Self::Output {
		let two_x = self.x * T::from_f64(2.0);
		let two_y = self.y * T::from_f64(2.0);
		let two_z = self.z * T::from_f64(2.0);
		let xx = self.x * two_x;
		let yy = self.y * two_y;
		let zz = self.z * two_z;
		let xy = self.x * two_y;
		let xz = self.x * two_z;
		let yz = self.y * two_z;
		let wx = self.w * two_x;
		let wy = self.w * two_y;
		let wz = self.w * two_z;
		[
			(T::IDENTITY - (yy + zz)) * vec[X] + (xy - wz) * vec[Y] + (xz + wy) * vec[Z],
			(xy + wz) * vec[X] + (T::IDENTITY - (xx + zz)) * vec[Y] + (yz - wx) * vec[Z],
			(xz - wy) * vec[X] + (yz + wx) * vec[Y] + (T::IDENTITY - (xx + yy)) * vec[Z],
		]
		.into()
	}
}

/// Components in `(w, x, y, z)` order.
impl<T> From<[T; 4]> for Quaternion<T> {
	fn from([w, x, y, z]: [T; 4]) -> Self {
		Self { w, x, y, z }
	}
}

impl<T> From<Quaternion<T>> for [T; 4] {
	fn from(q: Quaternion<T>) -> Self {
		[q.w, q.x, q.y, q.z]
	}
}

impl<T: std::fmt::Display> std::fmt::Display for Quaternion<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
	}
}
