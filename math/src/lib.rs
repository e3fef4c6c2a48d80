//! Fixed size vectors and quaternions, generic over the float type.

mod angle;
mod quaternion;
mod requirements;
mod vector;

pub use angle::*;
pub use quaternion::*;
pub use requirements::*;
pub use vector::*;

/// Axis used to index a [`Vector`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dimension(pub usize);

pub const X: Dimension = Dimension(0);
pub const Y: Dimension = Dimension(1);
pub const Z: Dimension = Dimension(2);

impl Dimension {
	/// Every axis of an `N` dimensional vector.
	pub fn all<const N: usize>() -> impl Iterator<Item = Self> {
		(0..N).map(Self)
	}
}
