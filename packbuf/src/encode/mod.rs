//! Encoding traits: how a type is measured and written into a [`crate::io::Cursor`].

mod encode;
mod scalar;

pub use encode::Encode;
pub use scalar::Scalar;

/// The width of the element count written in front of arrays, slices, and containers.
pub const COUNT_WIDTH: usize = size_of::<usize>();
