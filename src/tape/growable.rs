use super::{LeftEdge, Tape};
use crate::{executor::Trap, limits::Limits, step::Cell};
use std::ops::{Deref, DerefMut};

/// A tape that starts as a single zero cell and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowableTape {
    data: Vec<Cell>,
    index: usize,
    max_address: usize,
    left_edge: LeftEdge,
}

impl Default for GrowableTape {
    fn default() -> Self {
        Self::new(&Limits::default())
    }
}

impl GrowableTape {
    pub fn new(limits: &Limits) -> Self {
        Self {
            data: vec![0],
            index: 0,
            max_address: limits.max_address,
            left_edge: limits.left_edge,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn shift_right(&mut self, amount: usize) -> Result<(), Trap> {
        let new_index = self
            .index
            .checked_add(amount)
            .filter(|&index| index <= self.max_address)
            .ok_or(Trap::PointerOverflow)?;

        if new_index >= self.data.len() {
            self.data.resize(new_index + 1, 0);
        }

        self.index = new_index;
        Ok(())
    }

    fn shift_left(&mut self, amount: usize) -> Result<(), Trap> {
        if let Some(new_index) = self.index.checked_sub(amount) {
            self.index = new_index;
            return Ok(());
        }

        match self.left_edge {
            LeftEdge::Fail => Err(Trap::PointerUnderflow),
            LeftEdge::Grow => {
                let missing = amount - self.index;
                let new_len = self
                    .data
                    .len()
                    .checked_add(missing)
                    .filter(|&len| len - 1 <= self.max_address)
                    .ok_or(Trap::PointerUnderflow)?;

                self.data.resize(new_len, 0);
                self.data.rotate_right(missing);
                self.index = 0;
                Ok(())
            }
        }
    }
}

impl Deref for GrowableTape {
    type Target = Cell;

    fn deref(&self) -> &Self::Target {
        &self.data[self.index]
    }
}

impl DerefMut for GrowableTape {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data[self.index]
    }
}

impl Tape for GrowableTape {
    fn shift(&mut self, amount: isize) -> Result<(), Trap> {
        if amount < 0 {
            self.shift_left(amount.unsigned_abs())
        } else {
            self.shift_right(amount.unsigned_abs())
        }
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
