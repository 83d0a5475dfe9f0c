//! The bounds-tracked write cursor.

mod cursor;

pub use cursor::Cursor;
