use std::fmt;

use serde::Serialize;

use crate::step::Cell;

/// Why a run stopped early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trap {
    /// A cell went above the maximum value (or an input value was too large).
    DataOverflow,
    /// A cell went below zero.
    DataUnderflow,
    /// The pointer moved past the maximum address.
    PointerOverflow,
    /// The pointer moved left of the first cell.
    PointerUnderflow,
    /// The program tried to output more values than allowed.
    OutputOverflow,
    /// A loop needed a partner bracket that does not exist. `open` is `true`
    /// for a `[` without a `]`.
    UnmatchedBracket { open: bool },
    /// The step ceiling was reached.
    StepLimitExceeded,
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataOverflow => write!(f, "data overflow"),
            Self::DataUnderflow => write!(f, "data underflow"),
            Self::PointerOverflow => write!(f, "pointer overflow"),
            Self::PointerUnderflow => write!(f, "pointer underflow"),
            Self::OutputOverflow => write!(f, "output overflow"),
            Self::UnmatchedBracket { open: true } => write!(f, "`[` found without corresponding `]`"),
            Self::UnmatchedBracket { open: false } => {
                write!(f, "`]` found without corresponding `[`")
            }
            Self::StepLimitExceeded => write!(f, "ran for too many steps"),
        }
    }
}

impl std::error::Error for Trap {}

/// A trap annotated with where it happened and what had been output by then.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub trap: Trap,
    /// Byte offset of the instruction that trapped.
    pub ip: usize,
    pub steps: u64,
    /// Everything output before the trap.
    pub output: Vec<Cell>,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ip={} after {} steps",
            self.trap, self.ip, self.steps
        )
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.trap)
    }
}
