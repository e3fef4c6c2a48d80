use serde::Serialize;

/// Finest supported rounding. `10^15` steps still fit the integer part of an `f64` exactly.
pub const MAX_PRECISION: u32 = 15;

/// Height rounded to `precision` decimal digits.
///
/// Stored as an integer count of `10^-precision` steps so keys compare and hash exactly.
/// Ties round to even, `0.125` becomes `0.12`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HeightKey {
	steps: i64,
	precision: u32,
}

impl HeightKey {
	/// `None` for values without a representable key (NaN, infinite or huge values) and for
	/// precisions above [`MAX_PRECISION`].
	pub fn new(value: f64, precision: u32) -> Option<Self> {
		if !value.is_finite() || precision > MAX_PRECISION {
			return None;
		}
		let steps = (value * Self::scale(precision)).round_ties_even();
		if steps.abs() >= i64::MAX as f64 {
			return None;
		}
		Some(Self { steps: steps as i64, precision })
	}

	fn scale(precision: u32) -> f64 {
		10f64.powi(precision as i32)
	}

	pub fn steps(self) -> i64 {
		self.steps
	}

	pub fn precision(self) -> u32 {
		self.precision
	}

	/// The rounded height.
	pub fn value(self) -> f64 {
		self.steps as f64 / Self::scale(self.precision)
	}
}

impl std::fmt::Display for HeightKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:+.*}", self.precision as usize, self.value())
	}
}
