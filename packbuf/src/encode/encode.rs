use crate::alignment::Alignment;
use crate::error::Error;
use crate::io::Cursor;

/// The type can be packed into a [`crate::PackBuffer`].
///
/// `Encode` is implemented by packbuf for scalars (via [`crate::encode::Scalar`]),
/// strings, arrays and slices of scalars, pairs, and the standard sequences,
/// sets and maps. The implementation is selected by the static type of the
/// value, there is no runtime type inspection.
///
/// Implementations must keep [`Encode::encoded_len`], [`Encode::packed_len`]
/// and [`Encode::encode`] consistent: `encode` must advance the cursor by
/// exactly `packed_len` bytes for the cursor's alignment.
pub trait Encode {
    /// The encoded length shared by every value of the type, if there is one.
    ///
    /// Only types that are written with a single cursor write, like scalars,
    /// should set this. Containers use it to compute their size in closed form
    /// instead of visiting each element.
    const FIXED_WIDTH: Option<usize> = None;

    /// The number of bytes the value encodes to, not counting alignment padding.
    fn encoded_len(&self) -> usize;

    /// The number of bytes the cursor advances when the value is encoded,
    /// including the padding added by the `alignment`.
    ///
    /// The default is correct for types that are written with a single
    /// cursor write.
    fn packed_len(&self, alignment: Alignment) -> usize {
        alignment.round_up(self.encoded_len())
    }

    /// Check whether the value can be packed at all, regardless of capacity.
    ///
    /// Empty sequences, sets and maps are not packed.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Write the value into the `cursor`.
    ///
    /// The caller must make sure that [`Encode::validate`] succeeded and that
    /// [`Encode::packed_len`] bytes fit in the cursor. The cursor panics
    /// otherwise.
    fn encode(&self, cursor: &mut Cursor<'_>);
}
