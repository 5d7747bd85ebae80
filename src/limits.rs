//! Resource ceilings for a single execution.

use serde::{Deserialize, Serialize};

use crate::{step::Cell, step::Overflow, tape::LeftEdge};

/// Largest integer a double can hold exactly; cells default to this so that
/// arithmetic puzzles are not limited to bytes.
pub const MAX_SAFE_CELL: Cell = (1 << 53) - 1;

/// Execution limits for an engine run.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of values a program may output.
    pub max_output: usize,
    /// Step ceiling. A run fails once its step count reaches this value.
    pub max_steps: u64,
    /// Highest addressable tape index.
    pub max_address: usize,
    /// Highest value a cell may hold.
    pub max_cell: Cell,
    pub on_overflow: Overflow,
    pub left_edge: LeftEdge,
}

impl Default for Limits {
    fn default() -> Self {
        Self::strict()
    }
}

impl Limits {
    /// Fail-fast limits with wide cells. This is what leaderboards use.
    pub const fn strict() -> Self {
        Self {
            max_output: 0x400,
            max_steps: 0x100_0000,
            max_address: 0x7FFF,
            max_cell: MAX_SAFE_CELL,
            on_overflow: Overflow::Fail,
            left_edge: LeftEdge::Fail,
        }
    }

    /// Classic byte cells that wrap modulo 256.
    pub const fn byte() -> Self {
        Self {
            max_cell: u8::MAX as Cell,
            on_overflow: Overflow::Wrap,
            ..Self::strict()
        }
    }

    /// Byte cells that fail instead of wrapping.
    pub const fn strict_byte() -> Self {
        Self {
            max_cell: u8::MAX as Cell,
            ..Self::strict()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let limits = Limits::from_json(r#"{ "max_steps": 100, "on_overflow": "wrap" }"#).unwrap();
        assert_eq!(limits.max_steps, 100);
        assert_eq!(limits.on_overflow, Overflow::Wrap);
        assert_eq!(limits.max_output, Limits::strict().max_output);
        assert_eq!(limits.left_edge, LeftEdge::Fail);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Limits::from_json(r#"{ "on_overflow": "explode" }"#).is_err());
    }

    #[test]
    fn presets() {
        assert_eq!(Limits::default(), Limits::strict());
        assert_eq!(Limits::byte().max_cell, 255);
        assert_eq!(Limits::byte().on_overflow, Overflow::Wrap);
        assert_eq!(Limits::strict_byte().on_overflow, Overflow::Fail);
    }
}
