use alloc::collections::{LinkedList, VecDeque};
use alloc::vec::Vec;

use super::container::{elements_len, elements_packed_len, encode_elements, validate_elements};
use crate::alignment::Alignment;
use crate::encode::Encode;
use crate::error::Error;
use crate::io::Cursor;

macro_rules! impl_encode_sequence {
    ($($container:ident),*) => {
        $(
            impl<T: Encode> Encode for $container<T> {
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
        )*
    };
}

impl_encode_sequence!(Vec, VecDeque, LinkedList);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::COUNT_WIDTH;
    use alloc::string::String;
    use alloc::vec;

    fn count_bytes(count: usize) -> [u8; COUNT_WIDTH] {
        count.to_ne_bytes()
    }

    #[test]
    fn vec_of_scalars() {
        let values: Vec<u32> = vec![7, 8, 9];
        assert_eq!(values.encoded_len(), COUNT_WIDTH + 3 * 4);

        let mut buffer = [0xEEu8; 64];
        let mut cursor = Cursor::new(&mut buffer, Alignment::Four);
        values.encode(&mut cursor);
        assert_eq!(cursor.offset(), values.packed_len(Alignment::Four));
        let written = cursor.written();
        assert_eq!(&written[..COUNT_WIDTH], &count_bytes(3));
        assert_eq!(&written[COUNT_WIDTH..COUNT_WIDTH + 4], &7u32.to_ne_bytes());
        assert_eq!(&written[COUNT_WIDTH + 8..], &9u32.to_ne_bytes());
    }

    #[test]
    fn elements_are_padded_individually() {
        let values: VecDeque<u8> = [1, 2].into_iter().collect();
        let alignment = Alignment::Four;
        assert_eq!(values.packed_len(alignment), alignment.round_up(COUNT_WIDTH) + 2 * 4);

        let mut buffer = [0xEEu8; 64];
        let mut cursor = Cursor::new(&mut buffer, alignment);
        values.encode(&mut cursor);
        let start = alignment.round_up(COUNT_WIDTH);
        assert_eq!(&cursor.written()[start..], &[1, 0, 0, 0, 2, 0, 0, 0]);
    }

    #[test]
    fn list_of_strings() {
        let values: LinkedList<String> = ["ab", "c"].into_iter().map(String::from).collect();
        assert_eq!(values.encoded_len(), COUNT_WIDTH + 3 + 2);

        let mut buffer = [0xEEu8; 64];
        let mut cursor = Cursor::new(&mut buffer, Alignment::One);
        values.encode(&mut cursor);
        assert_eq!(&cursor.written()[COUNT_WIDTH..], b"ab\0c\0");
    }

    #[test]
    fn nested_sequences() {
        let values: Vec<Vec<u16>> = vec![vec![1], vec![2, 3]];
        assert_eq!(values.encoded_len(), COUNT_WIDTH + (COUNT_WIDTH + 2) + (COUNT_WIDTH + 4));
        assert_eq!(values.validate(), Ok(()));

        let mut buffer = [0xEEu8; 64];
        let mut cursor = Cursor::new(&mut buffer, Alignment::One);
        values.encode(&mut cursor);
        assert_eq!(cursor.offset(), values.encoded_len());
    }

    #[test]
    fn empty_sequence_is_invalid() {
        let values: Vec<u32> = Vec::new();
        assert!(values.validate().is_err());
    }
}
