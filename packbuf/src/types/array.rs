use crate::alignment::Alignment;
use crate::encode::{COUNT_WIDTH, Encode, Scalar};
use crate::io::Cursor;

// Slices and arrays of scalars are packed as the element count followed by
// one raw copy of all the elements. Unlike containers, empty slices are packed
// too: the count is written as zero.

impl<T: Scalar> Encode for [T] {
    fn encoded_len(&self) -> usize {
        COUNT_WIDTH + self.len() * T::WIDTH
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        alignment.round_up(COUNT_WIDTH) + alignment.round_up(self.len() * T::WIDTH)
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        self.len().encode(cursor);
        cursor.write_with(self.len() * T::WIDTH, |target| {
            for (index, value) in self.iter().enumerate() {
                value.write_ne_bytes(&mut target[index * T::WIDTH..(index + 1) * T::WIDTH]);
            }
        });
    }
}

impl<T: Scalar, const N: usize> Encode for [T; N] {
    fn encoded_len(&self) -> usize {
        self.as_slice().encoded_len()
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        self.as_slice().packed_len(alignment)
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        self.as_slice().encode(cursor)
    }
}
