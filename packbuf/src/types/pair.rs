use crate::alignment::Alignment;
use crate::encode::Encode;
use crate::error::Error;
use crate::io::Cursor;

// The arity of a pair is static, so there is no count in front of it.
impl<A: Encode, B: Encode> Encode for (A, B) {
    fn encoded_len(&self) -> usize {
        self.0.encoded_len() + self.1.encoded_len()
    }

    fn packed_len(&self, alignment: Alignment) -> usize {
        self.0.packed_len(alignment) + self.1.packed_len(alignment)
    }

    fn validate(&self) -> Result<(), Error> {
        self.0.validate()?;
        self.1.validate()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        self.0.encode(cursor);
        self.1.encode(cursor);
    }
}
