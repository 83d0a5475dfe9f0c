use num::traits::ToBytes;

use crate::encode::Scalar;

macro_rules! impl_scalar {
    ($($type:ty),*) => {
        $(
            impl Scalar for $type {
                const WIDTH: usize = size_of::<$type>();

                fn write_ne_bytes(&self, target: &mut [u8]) {
                    target.copy_from_slice(ToBytes::to_ne_bytes(self).as_ref());
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, u128, usize);
impl_scalar!(i8, i16, i32, i64, i128, isize);
impl_scalar!(f32, f64);
