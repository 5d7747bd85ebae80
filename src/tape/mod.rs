mod growable;

pub use growable::*;

use std::ops::DerefMut;

use serde::{Deserialize, Serialize};

use crate::{executor::Trap, step::Cell};

/// A tape dereferences to the cell under its pointer.
pub trait Tape: DerefMut<Target = Cell> {
    /// Moves the pointer by `amount` cells, growing the tape as needed.
    fn shift(&mut self, amount: isize) -> Result<(), Trap>;

    /// Number of cells allocated so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What `<` does on the first cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftEdge {
    /// Abort with `PointerUnderflow`.
    #[default]
    Fail,
    /// Prepend zero cells so the pointer stays on the tape.
    Grow,
}
