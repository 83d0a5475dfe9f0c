use crate::alignment::Alignment;

/// The write position within a fixed-size, borrowed byte buffer.
///
/// Every movement of the cursor is rounded up to a multiple of the
/// [`Alignment`] quantum, so values written through the cursor always start
/// at a quantum boundary. The padding between the end of a value and the next
/// boundary is filled with zeros.
///
/// The cursor does not check whether a write is sensible, it only guards its
/// bounds: moving past the end of the buffer or before its beginning is a bug
/// in the caller and panics. Callers are expected to compare the size of
/// what they write against [`Cursor::remaining`] first.
#[derive(Debug)]
pub struct Cursor<'a> {
    bytes: &'a mut [u8],
    offset: usize,
    alignment: Alignment,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the beginning of `bytes`.
    pub fn new(bytes: &'a mut [u8], alignment: Alignment) -> Self {
        Self { bytes, offset: 0, alignment }
    }

    /// The total size of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// The number of bytes written so far, including padding.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The number of bytes between the current position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.offset
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.bytes[..self.offset]
    }

    /// The bytes from the current position up to the end of the buffer.
    ///
    /// This is where the next write goes.
    pub fn unwritten(&mut self) -> &mut [u8] {
        &mut self.bytes[self.offset..]
    }

    /// Move the cursor forward by `len` bytes rounded up to the alignment.
    ///
    /// ## Panics
    ///
    /// When the rounded length does not fit in the remaining space.
    pub fn advance(&mut self, len: usize) {
        let aligned = self.alignment.round_up(len);
        assert!(
            aligned <= self.remaining(),
            "cannot advance by {aligned} bytes, only {} bytes remain",
            self.remaining()
        );
        self.offset += aligned;
    }

    /// Move the cursor backward by `len` bytes rounded up to the alignment.
    ///
    /// ## Panics
    ///
    /// When the rounded length is more than what was written.
    pub fn retreat(&mut self, len: usize) {
        let aligned = self.alignment.round_up(len);
        assert!(aligned <= self.offset, "cannot retreat by {aligned} bytes, only {} bytes were written", self.offset);
        self.offset -= aligned;
    }

    /// Copy `bytes` to the current position and advance past them.
    ///
    /// ## Panics
    ///
    /// Same as [`Cursor::advance`]. Nothing is written in that case.
    pub fn write(&mut self, bytes: &[u8]) {
        self.write_with(bytes.len(), |target| target.copy_from_slice(bytes));
    }

    /// Let `fill` write exactly `len` bytes at the current position, then
    /// advance past them.
    ///
    /// ## Panics
    ///
    /// Same as [`Cursor::advance`]. `fill` is not called in that case.
    pub fn write_with(&mut self, len: usize, fill: impl FnOnce(&mut [u8])) {
        let aligned = self.alignment.round_up(len);
        assert!(aligned <= self.remaining(), "cannot write {aligned} bytes, only {} bytes remain", self.remaining());
        let (target, padding) = self.unwritten()[..aligned].split_at_mut(len);
        fill(target);
        padding.fill(0);
        self.advance(len);
    }
}
