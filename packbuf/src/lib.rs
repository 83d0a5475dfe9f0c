#![warn(missing_docs)]

//! # Packbuf
//!
//! Packbuf packs values into a byte buffer that you allocate and own. The
//! buffer has a fixed capacity: it never grows, and a value that doesn't fit
//! is rejected without touching the buffer.
//!
//! ## Packing values
//!
//! Create a [`PackBuffer`] over a mutable byte slice and [`PackBuffer::put`]
//! values into it one after the other:
//!
//! ```
//! use packbuf::{Alignment, PackBuffer};
//!
//! let mut memory = [0u8; 16];
//! let mut buffer = PackBuffer::with_alignment(&mut memory, Alignment::Four);
//! buffer.put(&7i32)?;
//! buffer.put(&9i32)?;
//! buffer.put("hello")?;
//! assert_eq!(buffer.data_size(), 16);
//! assert!(buffer.put(&1i32).is_err());
//! assert_eq!(buffer.data_size(), 16);
//! # Ok::<(), packbuf::error::Error>(())
//! ```
//!
//! How a value is packed is decided by its static type through the
//! [`encode::Encode`] trait:
//! - scalars ([`encode::Scalar`]: integers, floats, [`bool`], [`char`]) are
//!   copied as their native bytes,
//! - text ([`str`], `String`, [`core::ffi::CStr`], `CString`) is copied with a
//!   zero terminator,
//! - arrays and slices of scalars are packed as the element count followed by
//!   a raw copy of the elements,
//! - sequences (`Vec`, `VecDeque`, `LinkedList`), sets (`BTreeSet`, `HashSet`)
//!   and maps (`BTreeMap`, `HashMap`) are packed as the element count followed
//!   by each element (key, then value for maps) in iteration order,
//! - pairs are packed as the first element followed by the second.
//!
//! The element count is a native [`usize`]. Empty sequences, sets and maps
//! are not packed at all: [`PackBuffer::put`] fails with
//! [`error::ErrorKind::EmptyContainer`] and writes nothing.
//!
//! ## Alignment
//!
//! Every value written into the buffer starts at a multiple of the buffer's
//! [`Alignment`]. The gap between the end of a value and the next multiple is
//! filled with zeros. Use [`PackBuffer::type_size`] for the size of a value's
//! encoding, and [`PackBuffer::packed_size`] for the space it takes in a given
//! buffer, padding included.
//!
//! ## Failures
//!
//! [`PackBuffer::put`] returns an [`error::Error`] when a value cannot be
//! packed. The buffer is unchanged in that case, you can keep packing other
//! values into it. The [`io::Cursor`] underneath panics if it is moved out of
//! bounds, which indicates a bug in an [`encode::Encode`] implementation
//! rather than a problem with the packed data.
//!
//! ## `no_std`
//!
//! Packbuf never allocates. Without the `alloc` feature, it supports
//! scalars, text, arrays, slices and pairs. The `alloc` feature adds `String`,
//! `CString` and the collections in [`alloc::collections`], and the `std`
//! feature (enabled by default) adds `HashSet` and `HashMap`.

// Disable the [`std`] standard crate when the "std" feature is not enabled.
#![cfg_attr(not(feature = "std"), no_std)]

// Enable the [`alloc`] standard crate when the "alloc" feature is enabled.
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod alignment;
pub mod buffer;
pub mod encode;
pub mod error;
pub mod io;

mod types;

pub use alignment::Alignment;
pub use buffer::{PackBuffer, Section};
