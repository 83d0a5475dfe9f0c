//! Soft failures reported by [`crate::PackBuffer`].
//!
//! These are the recoverable outcomes of packing: the buffer is left exactly
//! as it was before the failed call. Violations of the cursor's contract are
//! not errors, they panic. (See [`crate::io::Cursor`].)

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// The packed value needs more bytes than there are left in the buffer.
    CapacityExceeded { required: usize, available: usize },
    /// A sequence, set or map (possibly nested in the value) has no elements.
    EmptyContainer,
    /// The alignment quantum is not one of the supported powers of two.
    InvalidAlignment(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Error {
    kind: ErrorKind,
}

//------------------------------------------------------------------------------
// Error implementations
//------------------------------------------------------------------------------

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(value: ErrorKind) -> Self {
        Self { kind: value }
    }
}

//------------------------------------------------------------------------------
// ErrorKind implementations
//------------------------------------------------------------------------------

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ErrorKind::*;
        match self {
            CapacityExceeded { required, available } => {
                write!(f, "the value needs {required} bytes, but only {available} bytes are left in the buffer")
            }
            EmptyContainer => write!(f, "empty containers are not packed"),
            InvalidAlignment(quantum) => write!(f, "{quantum} is not a supported alignment quantum"),
        }
    }
}
