use std::ops::{Add, Div, Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::{
	requirements::{Sqrt, Zero},
	Dimension,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize, T>([T; N]);

impl<const N: usize, T> Default for Vector<N, T>
where
	T: Zero + Copy,
{
	fn default() -> Self {
		Self([T::ZERO; N])
	}
}

impl<const N: usize, T> Index<Dimension> for Vector<N, T> {
	type Output = T;

	fn index(&self, index: Dimension) -> &T {
		&self.0[index.0]
	}
}

impl<const N: usize, T> IndexMut<Dimension> for Vector<N, T> {
	fn index_mut(&mut self, index: Dimension) -> &mut T {
		&mut self.0[index.0]
	}
}

impl<const N: usize, T> Mul<T> for Vector<N, T>
where
	T: Mul<Output = T>,
	T: Copy,
{
	type Output = Self;

	fn mul(mut self, other: T) -> Self {
		for i in Dimension::all::<N>() {
			self[i] = self[i] * other;
		}
		self
	}
}

impl<const N: usize, T> Div<T> for Vector<N, T>
where
	T: Div<Output = T>,
	T: Copy,
{
	type Output = Self;

	fn div(mut self, other: T) -> Self {
		for i in Dimension::all::<N>() {
			self[i] = self[i] / other;
		}
		self
	}
}

impl<const N: usize, T> Vector<N, T> {
	pub const fn new(data: [T; N]) -> Self {
		Self(data)
	}

	pub fn data(self) -> [T; N]
	where
		T: Copy,
	{
		self.0
	}

	pub fn dot(self, other: Self) -> T
	where
		T: Zero,
		T: Copy,
		T: Add<T, Output = T>,
		T: Mul<T, Output = T>,
	{
		let mut res = T::ZERO;
		for i in Dimension::all::<N>() {
			res = res + self[i] * other[i];
		}
		res
	}

	pub fn length_squared(self) -> T
	where
		T: Zero,
		T: Copy,
		T: Add<T, Output = T>,
		T: Mul<T, Output = T>,
	{
		self.dot(self)
	}

	pub fn length(self) -> T
	where
		T: Zero,
		T: Copy,
		T: Add<T, Output = T>,
		T: Mul<T, Output = T>,
		T: Sqrt,
	{
		self.length_squared().sqrt()
	}

	pub fn normalized(self) -> Self
	where
		T: Zero,
		T: Copy,
		T: Add<T, Output = T>,
		T: Mul<T, Output = T>,
		T: Div<T, Output = T>,
		T: Sqrt,
	{
		self / self.length()
	}
}

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
	fn from(value: [T; N]) -> Self {
		Self(value)
	}
}

impl<const N: usize, T> Serialize for Vector<N, T>
where
	[T; N]: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		self.0.serialize(serializer)
	}
}

impl<'de, const N: usize, T> Deserialize<'de> for Vector<N, T>
where
	[T; N]: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Self(<[T; N]>::deserialize(deserializer)?))
	}
}
