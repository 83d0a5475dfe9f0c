use super::Encode;
use crate::io::Cursor;

/// A fixed-width value that is packed as a raw copy of its native bytes.
///
/// Implemented for the integer and floating point primitives, [`bool`], and
/// [`char`]. You may implement it for your own plain value types as long as
/// [`Scalar::write_ne_bytes`] always fills exactly [`Scalar::WIDTH`] bytes.
pub trait Scalar: Copy {
    /// The number of bytes the value occupies.
    const WIDTH: usize;

    /// Write the native byte representation of the value into `target`,
    /// which is exactly [`Scalar::WIDTH`] bytes long.
    fn write_ne_bytes(&self, target: &mut [u8]);
}

impl<T: Scalar> Encode for T {
    const FIXED_WIDTH: Option<usize> = Some(T::WIDTH);

    fn encoded_len(&self) -> usize {
        T::WIDTH
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        cursor.write_with(T::WIDTH, |target| self.write_ne_bytes(target));
    }
}
