use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;
#[cfg(feature = "std")]
use std::hash::BuildHasher;

use super::container::{elements_len, elements_packed_len, encode_elements, validate_elements};
use crate::alignment::Alignment;
use crate::encode::Encode;
use crate::error::Error;
use crate::io::Cursor;

// Elements are packed in the set's own iteration order: sorted for `BTreeSet`,
// unspecified but stable for an unmodified `HashSet`.

impl<T: Encode> Encode for BTreeSet<T> {
    fn encoded_len(&self) -> usize {
        elements_len(self.len(), self.iter())
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        elements_packed_len(alignment, self.len(), self.iter())
    }

    fn validate(&self) -> Result<(), Error> {
        validate_elements(self.len(), self.iter())
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        encode_elements(cursor, self.len(), self.iter())
    }
}

#[cfg(feature = "std")]
impl<T: Encode, S: BuildHasher> Encode for HashSet<T, S> {
    fn encoded_len(&self) -> usize {
        elements_len(self.len(), self.iter())
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        elements_packed_len(alignment, self.len(), self.iter())
    }

    fn validate(&self) -> Result<(), Error> {
        validate_elements(self.len(), self.iter())
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        encode_elements(cursor, self.len(), self.iter())
    }
}
