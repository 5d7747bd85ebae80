use crate::{executor::Trap, step::Cell};

pub trait Output {
    fn push(&mut self, value: Cell) -> Result<(), Trap>;
}

/// Collects output values up to a fixed count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundedOutput {
    values: Vec<Cell>,
    max_len: usize,
}

impl BoundedOutput {
    pub fn new(max_len: usize) -> Self {
        Self {
            values: Vec::new(),
            max_len,
        }
    }

    pub fn values(&self) -> &[Cell] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Cell> {
        self.values
    }
}

impl Output for BoundedOutput {
    fn push(&mut self, value: Cell) -> Result<(), Trap> {
        if self.values.len() >= self.max_len {
            return Err(Trap::OutputOverflow);
        }

        self.values.push(value);
        Ok(())
    }
}

/// Discards every value.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreOutput;

impl Output for IgnoreOutput {
    fn push(&mut self, _: Cell) -> Result<(), Trap> {
        Ok(())
    }
}
