use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// RGBA color, every channel in `[0, 1]`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32,
}

impl Color {
	pub const RED: Self = Self::from_rgb8(0xFC, 0x62, 0x55);
	pub const BLUE: Self = Self::from_rgb8(0x58, 0xC4, 0xDD);
	pub const GREEN: Self = Self::from_rgb8(0x83, 0xC1, 0x67);

	pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
		Self {
			r: r as f32 / 255.0,
			g: g as f32 / 255.0,
			b: b as f32 / 255.0,
			a: 1.0,
		}
	}

	/// Parses `#RRGGBB`, the leading `#` is optional.
	pub fn from_hex(value: &str) -> Result<Self, Error> {
		let invalid = || Error::InvalidColor(value.into());
		let digits = value.strip_prefix('#').unwrap_or(value);
		if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
			return Err(invalid());
		}
		let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| invalid());
		Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
	}

	pub fn lerp(self, other: Self, alpha: f32) -> Self {
		let mix = |a: f32, b: f32| a * (1.0 - alpha) + b * alpha;
		Self {
			r: mix(self.r, other.r),
			g: mix(self.g, other.g),
			b: mix(self.b, other.b),
			a: mix(self.a, other.a),
		}
	}

	pub fn to_array(self) -> [f32; 4] {
		[self.r, self.g, self.b, self.a]
	}
}

impl FromStr for Color {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

/// Piecewise linear gradient over evenly spaced color stops.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
	stops: Vec<Color>,
}

impl Default for Gradient {
	fn default() -> Self {
		Self {
			stops: vec![Color::RED, Color::BLUE, Color::GREEN, Color::RED],
		}
	}
}

impl Gradient {
	pub fn new(stops: Vec<Color>) -> Result<Self, Error> {
		if stops.is_empty() {
			return Err(Error::EmptyGradient);
		}
		Ok(Self { stops })
	}

	pub fn stops(&self) -> &[Color] {
		&self.stops
	}

	/// Color at `alpha`, clamped to `[0, 1]`.
	pub fn at(&self, alpha: f32) -> Color {
		if self.stops.len() == 1 {
			return self.stops[0];
		}
		let last = self.stops.len() - 1;
		let position = alpha.clamp(0.0, 1.0) * last as f32;
		// the final stop is reached from the segment before it
		let index = (position as usize).min(last - 1);
		self.stops[index].lerp(self.stops[index + 1], position - index as f32)
	}

	/// `count` colors evenly spread from the first to the last stop.
	pub fn sample(&self, count: usize) -> Vec<Color> {
		match count {
			0 => Vec::new(),
			1 => vec![self.at(0.0)],
			_ => (0..count)
				.map(|i| self.at(i as f32 / (count - 1) as f32))
				.collect(),
		}
	}
}
