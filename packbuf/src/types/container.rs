//! Size computation and writing shared by sequences, sets and maps.
//!
//! Containers are packed as the element count followed by each element in
//! iteration order. When the element type has a fixed width, sizes are
//! computed in closed form without visiting the elements.

use crate::alignment::Alignment;
use crate::encode::{COUNT_WIDTH, Encode};
use crate::error::{Error, ErrorKind};
use crate::io::Cursor;

pub fn elements_len<'a, T: Encode + 'a>(count: usize, elements: impl Iterator<Item = &'a T>) -> usize {
    COUNT_WIDTH
        + match T::FIXED_WIDTH {
            Some(width) => count * width,
            None => elements.map(Encode::encoded_len).sum(),
        }
}

pub fn elements_packed_len<'a, T: Encode + 'a>(
    alignment: Alignment,
    count: usize,
    elements: impl Iterator<Item = &'a T>,
) -> usize {
    alignment.round_up(COUNT_WIDTH)
        + match T::FIXED_WIDTH {
            Some(width) => count * alignment.round_up(width),
            None => elements.map(|element| element.packed_len(alignment)).sum(),
        }
}

pub fn validate_elements<'a, T: Encode + 'a>(count: usize, elements: impl Iterator<Item = &'a T>) -> Result<(), Error> {
    if count == 0 {
        return Err(ErrorKind::EmptyContainer.into());
    }
    match T::FIXED_WIDTH {
        Some(_) => Ok(()),
        None => elements.map(Encode::validate).collect(),
    }
}

pub fn encode_elements<'a, T: Encode + 'a>(
    cursor: &mut Cursor<'_>,
    count: usize,
    elements: impl Iterator<Item = &'a T>,
) {
    count.encode(cursor);
    for element in elements {
        element.encode(cursor);
    }
}

pub fn entries_len<'a, K: Encode + 'a, V: Encode + 'a>(
    count: usize,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> usize {
    COUNT_WIDTH
        + match (K::FIXED_WIDTH, V::FIXED_WIDTH) {
            (Some(key_width), Some(value_width)) => count * (key_width + value_width),
            _ => entries.map(|(key, value)| key.encoded_len() + value.encoded_len()).sum(),
        }
}

pub fn entries_packed_len<'a, K: Encode + 'a, V: Encode + 'a>(
    alignment: Alignment,
    count: usize,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> usize {
    alignment.round_up(COUNT_WIDTH)
        + match (K::FIXED_WIDTH, V::FIXED_WIDTH) {
            (Some(key_width), Some(value_width)) => {
                count * (alignment.round_up(key_width) + alignment.round_up(value_width))
            }
            _ => entries.map(|(key, value)| key.packed_len(alignment) + value.packed_len(alignment)).sum(),
        }
}

pub fn validate_entries<'a, K: Encode + 'a, V: Encode + 'a>(
    count: usize,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> Result<(), Error> {
    if count == 0 {
        return Err(ErrorKind::EmptyContainer.into());
    }
    match (K::FIXED_WIDTH, V::FIXED_WIDTH) {
        (Some(_), Some(_)) => Ok(()),
        _ => entries.map(|(key, value)| key.validate().and_then(|_| value.validate())).collect(),
    }
}

pub fn encode_entries<'a, K: Encode + 'a, V: Encode + 'a>(
    cursor: &mut Cursor<'_>,
    count: usize,
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) {
    count.encode(cursor);
    for (key, value) in entries {
        key.encode(cursor);
        value.encode(cursor);
    }
}
