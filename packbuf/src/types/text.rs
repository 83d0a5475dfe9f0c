use core::ffi::CStr;

#[cfg(feature = "alloc")]
use alloc::{ffi::CString, string::String};

use crate::encode::Encode;
use crate::io::Cursor;

// Text is packed with a trailing zero terminator so that it can be read back
// as a C string.

impl Encode for str {
    fn encoded_len(&self) -> usize {
        self.len() + 1
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        cursor.write_with(self.encoded_len(), |target| {
            let (content, terminator) = target.split_at_mut(self.len());
            content.copy_from_slice(self.as_bytes());
            terminator[0] = 0;
        });
    }
}

impl Encode for CStr {
    fn encoded_len(&self) -> usize {
        self.to_bytes_with_nul().len()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        cursor.write(self.to_bytes_with_nul());
    }
}

impl Encode for &str {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        (**self).encode(cursor)
    }
}

impl Encode for &CStr {
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        (**self).encode(cursor)
    }
}

#[cfg(feature = "alloc")]
impl Encode for String {
    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        self.as_str().encode(cursor)
    }
}

#[cfg(feature = "alloc")]
impl Encode for CString {
    fn encoded_len(&self) -> usize {
        self.as_c_str().encoded_len()
    }

    fn encode(&self, cursor: &mut Cursor<'_>) {
        self.as_c_str().encode(cursor)
    }
}
