use core::ops::Range;

use crate::alignment::Alignment;
use crate::encode::{Encode, Scalar};
use crate::error::{Error, ErrorKind};
use crate::io::Cursor;

/// The bytes of the buffer a packed value occupies, padding included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section(Range<usize>);

/// Packs values into a fixed-size byte buffer owned by someone else.
///
/// The buffer never grows: a value that does not fit is rejected and the
/// buffer is left as it was. Values are laid out one after the other, each
/// starting at a multiple of the buffer's [`Alignment`].
///
/// ```
/// use packbuf::{Alignment, PackBuffer};
///
/// let mut memory = [0u8; 16];
/// let mut buffer = PackBuffer::with_alignment(&mut memory, Alignment::Four);
/// buffer.put(&7i32)?;
/// buffer.put("hello")?;
/// assert_eq!(buffer.data_size(), 12);
/// assert_eq!(buffer.buffer_size(), 4);
/// # Ok::<(), packbuf::error::Error>(())
/// ```
#[derive(Debug)]
pub struct PackBuffer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> PackBuffer<'a> {
    /// Create a buffer over `bytes` that aligns values to the native word size.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self::with_alignment(bytes, Alignment::default())
    }

    /// Create a buffer over `bytes` that aligns values to `alignment`.
    pub fn with_alignment(bytes: &'a mut [u8], alignment: Alignment) -> Self {
        Self { cursor: Cursor::new(bytes, alignment) }
    }

    /// Pack `value` after the previously packed values.
    ///
    /// ## Errors
    ///
    /// - [`ErrorKind::EmptyContainer`] when the value is, or contains, an empty
    ///   sequence, set or map. Nothing is written.
    /// - [`ErrorKind::CapacityExceeded`] when the value and its padding don't
    ///   fit in the remaining space. Nothing is written.
    pub fn put<V: Encode + ?Sized>(&mut self, value: &V) -> Result<Section, Error> {
        value.validate()?;
        let required = value.packed_len(self.cursor.alignment());
        let available = self.cursor.remaining();
        if required > available {
            return Err(ErrorKind::CapacityExceeded { required, available }.into());
        }
        let start = self.cursor.offset();
        value.encode(&mut self.cursor);
        debug_assert_eq!(self.cursor.offset() - start, required, "packed length disagrees with bytes written");
        Ok(Section(start..self.cursor.offset()))
    }

    /// Pack the element count of `values` followed by a raw copy of the elements.
    ///
    /// Same as [`PackBuffer::put`] with a slice. An empty slice is packed as a
    /// zero count.
    pub fn put_slice<T: Scalar>(&mut self, values: &[T]) -> Result<Section, Error> {
        self.put(values)
    }

    /// The number of bytes `value` encodes to, without padding.
    ///
    /// This does not depend on any buffer's state. Use [`PackBuffer::packed_size`]
    /// to predict how much space a [`PackBuffer::put`] will take.
    pub fn type_size<V: Encode + ?Sized>(value: &V) -> usize {
        value.encoded_len()
    }

    /// The number of bytes any value of the scalar type `T` encodes to.
    pub fn type_size_of<T: Scalar>() -> usize {
        T::WIDTH
    }

    /// The number of bytes [`PackBuffer::put`] would take for `value` in this
    /// buffer, padding included.
    pub fn packed_size<V: Encode + ?Sized>(&self, value: &V) -> usize {
        value.packed_len(self.cursor.alignment())
    }

    /// Rewind to the beginning so that the memory can be packed again.
    ///
    /// The previously written bytes are not cleared.
    pub fn reset(&mut self) {
        let written = self.cursor.offset();
        self.cursor.retreat(written);
    }

    /// The bytes packed so far.
    pub fn data(&self) -> &[u8] {
        self.cursor.written()
    }

    /// The number of bytes packed so far, padding included.
    pub fn data_size(&self) -> usize {
        self.cursor.offset()
    }

    /// The number of bytes left in the buffer.
    pub fn buffer_size(&self) -> usize {
        self.cursor.remaining()
    }

    /// The total size of the underlying memory.
    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    pub fn alignment(&self) -> Alignment {
        self.cursor.alignment()
    }
}

impl AsRef<[u8]> for PackBuffer<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl Section {
    /// The offset of the first byte of the section.
    pub fn start(&self) -> usize {
        self.0.start
    }

    /// The offset one past the last byte of the section.
    pub fn end(&self) -> usize {
        self.0.end
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.0.clone()
    }
}
