use math::Quaternion;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::Error;

#[derive(clap::Args)]
pub struct QuatCommand {
	/// Two quaternions as W X Y Z W X Y Z
	#[arg(num_args = 8, allow_negative_numbers = true, required_unless_present = "random")]
	pub values: Vec<f64>,

	/// Multiply two random unit quaternions
	#[arg(long, conflicts_with = "values")]
	pub random: bool,

	/// Seed for the random quaternions
	#[arg(long, requires = "random")]
	pub seed: Option<u64>,

	/// Normalize both quaternions before multiplying
	#[arg(long)]
	pub normalize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Products {
	pub lhs: Quaternion<f64>,
	pub rhs: Quaternion<f64>,
	pub product: Quaternion<f64>,
	pub reversed: Quaternion<f64>,
}

pub fn run(command: QuatCommand) -> Result<Products, Error> {
	let products = multiply(command)?;
	println!("a     = {}", products.lhs);
	println!("b     = {}", products.rhs);
	println!("a * b = {}", products.product);
	println!("b * a = {}", products.reversed);
	println!("|a * b| = {}", products.product.norm());
	Ok(products)
}

fn multiply(command: QuatCommand) -> Result<Products, Error> {
	let (mut lhs, mut rhs) = if command.random {
		let mut rng = match command.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};
		(random_unit(&mut rng), random_unit(&mut rng))
	} else {
		match command.values[..] {
			[w1, x1, y1, z1, w2, x2, y2, z2] => (
				Quaternion::new(w1, x1, y1, z1),
				Quaternion::new(w2, x2, y2, z2),
			),
			_ => return Err(Error::QuaternionValues(command.values.len())),
		}
	};
	if command.normalize {
		lhs = lhs.normalized();
		rhs = rhs.normalized();
	}
	Ok(Products {
		lhs,
		rhs,
		product: lhs * rhs,
		reversed: rhs * lhs,
	})
}

/// Uniformly distributed unit quaternion (Shoemake).
fn random_unit(rng: &mut impl Rng) -> Quaternion<f64> {
	let u1 = rng.gen::<f64>();
	let (sin2, cos2) = (std::f64::consts::TAU * rng.gen::<f64>()).sin_cos();
	let (sin3, cos3) = (std::f64::consts::TAU * rng.gen::<f64>()).sin_cos();
	let a = (1.0 - u1).sqrt();
	let b = u1.sqrt();
	Quaternion::new(a * sin2, a * cos2, b * sin3, b * cos3)
}
