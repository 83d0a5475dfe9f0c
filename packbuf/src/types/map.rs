use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::hash::BuildHasher;

use super::container::{encode_entries, entries_len, entries_packed_len, validate_entries};
use crate::alignment::Alignment;
use crate::encode::Encode;
use crate::error::Error;
use crate::io::Cursor;

// Each entry is packed as its key followed by its value.

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    fn encoded_len(&self) -> usize {
        entries_len(self.len(), self.iter())
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        entries_packed_len(alignment, self.len(), self.iter())
    }

    fn validate(&self) -> Result<(), Error> {
        validate_entries(self.len(), self.iter())
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        encode_entries(cursor, self.len(), self.iter())
    }
}

#[cfg(feature = "std")]
impl<K: Encode, V: Encode, S: BuildHasher> Encode for HashMap<K, V, S> {
    fn encoded_len(&self) -> usize {
        entries_len(self.len(), self.iter())
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        entries_packed_len(alignment, self.len(), self.iter())
    }

    fn validate(&self) -> Result<(), Error> {
        validate_entries(self.len(), self.iter())
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        encode_entries(cursor, self.len(), self.iter())
    }
}
