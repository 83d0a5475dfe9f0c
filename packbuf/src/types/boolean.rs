use crate::encode::Scalar;

impl Scalar for bool {
    const WIDTH: usize = 1;

    fn write_ne_bytes(&self, target: &mut [u8]) {
        target[0] = *self as u8;
    }
}

// Packed as the Unicode scalar value.
impl Scalar for char {
    const WIDTH: usize = size_of::<char>();

    fn write_ne_bytes(&self, target: &mut [u8]) {
        (*self as u32).write_ne_bytes(target);
    }
}
