use std::marker::PhantomData;

use crate::step::Cell;

/// Read-once cursor over a fixed input sequence.
///
/// The executor treats an exhausted input as an endless supply of zeroes, so
/// this only has to report where the values stop.
#[derive(Clone, Debug)]
pub struct Input<'a> {
    values: &'a [Cell],
    cursor: usize,
}

impl<'a> Input<'a> {
    pub fn new(values: &'a [Cell]) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> &'a [Cell] {
        &self.values[self.cursor..]
    }
}

impl Iterator for Input<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.values.get(self.cursor)?;
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct NoInput<T>(PhantomData<T>);

impl<T> Default for NoInput<T> {
    fn default() -> Self {
        NoInput::NEW
    }
}

impl<T> NoInput<T> {
    pub const NEW: NoInput<T> = NoInput(PhantomData);

    pub fn new() -> Self {
        Self::NEW
    }
}

impl<T> Iterator for NoInput<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        None
    }
}
