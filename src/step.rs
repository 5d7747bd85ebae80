use serde::{Deserialize, Serialize};

use crate::executor::Trap;

/// The value held by one tape cell.
pub type Cell = u64;

/// What a cell does when it is pushed past `0` or past the configured maximum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overflow {
    /// Abort the run with `DataOverflow` / `DataUnderflow`.
    #[default]
    Fail,
    /// Arithmetic modulo `max + 1`.
    Wrap,
    /// Clamp to `0..=max`.
    Saturate,
}

impl Overflow {
    pub fn inc(self, value: Cell, max: Cell) -> Result<Cell, Trap> {
        if value < max {
            return Ok(value + 1);
        }

        match self {
            Self::Fail => Err(Trap::DataOverflow),
            Self::Wrap => Ok(0),
            Self::Saturate => Ok(max),
        }
    }

    pub fn dec(self, value: Cell, max: Cell) -> Result<Cell, Trap> {
        if value > 0 {
            return Ok(value - 1);
        }

        match self {
            Self::Fail => Err(Trap::DataUnderflow),
            Self::Wrap => Ok(max),
            Self::Saturate => Ok(0),
        }
    }

    /// Brings an input value into `0..=max`.
    pub fn admit(self, value: Cell, max: Cell) -> Result<Cell, Trap> {
        if value <= max {
            return Ok(value);
        }

        match self {
            Self::Fail => Err(Trap::DataOverflow),
            Self::Wrap => Ok(max.checked_add(1).map_or(value, |modulus| value % modulus)),
            Self::Saturate => Ok(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_policy_traps_at_both_edges() {
        assert_eq!(Overflow::Fail.inc(254, 255), Ok(255));
        assert_eq!(Overflow::Fail.inc(255, 255), Err(Trap::DataOverflow));
        assert_eq!(Overflow::Fail.dec(1, 255), Ok(0));
        assert_eq!(Overflow::Fail.dec(0, 255), Err(Trap::DataUnderflow));
    }

    #[test]
    fn wrap_policy_is_modular() {
        assert_eq!(Overflow::Wrap.inc(255, 255), Ok(0));
        assert_eq!(Overflow::Wrap.dec(0, 255), Ok(255));
        assert_eq!(Overflow::Wrap.admit(300, 255), Ok(44));
        assert_eq!(Overflow::Wrap.inc(u64::MAX, u64::MAX), Ok(0));
        assert_eq!(Overflow::Wrap.admit(u64::MAX, u64::MAX), Ok(u64::MAX));
    }

    #[test]
    fn saturate_policy_clamps() {
        assert_eq!(Overflow::Saturate.inc(255, 255), Ok(255));
        assert_eq!(Overflow::Saturate.dec(0, 255), Ok(0));
        assert_eq!(Overflow::Saturate.admit(1000, 255), Ok(255));
    }

    #[test]
    fn oversized_input_fails_by_default() {
        assert_eq!(Overflow::Fail.admit(256, 255), Err(Trap::DataOverflow));
        assert_eq!(Overflow::Fail.admit(255, 255), Ok(255));
    }
}
