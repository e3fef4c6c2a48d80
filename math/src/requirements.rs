//! Numeric bounds for the generic vector and quaternion code, implemented for `f32` and `f64`.

pub trait FromF64 {
	fn from_f64(value: f64) -> Self;
}

/// Neutral element of multiplication.
pub trait Identity {
	const IDENTITY: Self;
}

pub trait Zero {
	const ZERO: Self;
}

pub trait Sqrt {
	fn sqrt(self) -> Self;
}

pub trait SinCos: Sized {
	fn sin_cos(self) -> (Self, Self);
}

macro_rules! float {
	($($ty:ty),*) => {$(
		impl FromF64 for $ty {
			fn from_f64(value: f64) -> Self {
				value as Self
			}
		}

		impl Identity for $ty {
			const IDENTITY: Self = 1.0;
		}

		impl Zero for $ty {
			const ZERO: Self = 0.0;
		}

		impl Sqrt for $ty {
			fn sqrt(self) -> Self {
				<$ty>::sqrt(self)
			}
		}

		impl SinCos for $ty {
			fn sin_cos(self) -> (Self, Self) {
				<$ty>::sin_cos(self)
			}
		}
	)*};
}

float!(f32, f64);
