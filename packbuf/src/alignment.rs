use crate::error::{Error, ErrorKind};

/// The granularity every cursor movement is rounded up to.
///
/// The default is the native word size of the target, that is,
/// `size_of::<usize>()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(usize)]
pub enum Alignment {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
    Sixteen = 16,
}

impl Alignment {
    /// The native word size of the target.
    pub const fn native() -> Self {
        match size_of::<usize>() {
            1 => Alignment::One,
            2 => Alignment::Two,
            4 => Alignment::Four,
            8 => Alignment::Eight,
            _ => Alignment::Sixteen,
        }
    }

    /// The quantum in bytes.
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Round `len` up to the next multiple of the quantum.
    ///
    /// ```
    /// # use packbuf::Alignment;
    /// assert_eq!(Alignment::Four.round_up(0), 0);
    /// assert_eq!(Alignment::Four.round_up(3), 4);
    /// assert_eq!(Alignment::Four.round_up(5), 8);
    /// ```
    pub const fn round_up(self, len: usize) -> usize {
        let quantum = self.bytes();
        len.div_ceil(quantum) * quantum
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::native()
    }
}

impl TryFrom<usize> for Alignment {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Alignment::One),
            2 => Ok(Alignment::Two),
            4 => Ok(Alignment::Four),
            8 => Ok(Alignment::Eight),
            16 => Ok(Alignment::Sixteen),
            other => Err(ErrorKind::InvalidAlignment(other).into()),
        }
    }
}
