mod instruction;

pub use instruction::*;

use std::{convert::Infallible, fmt::Display, str::FromStr};

/// Program text, kept as written.
///
/// Nothing is validated up front: a missing bracket partner is only noticed
/// when [`Program::find_loop_end`] or [`Program::find_loop_start`] is asked for
/// it during execution. Positions are byte offsets into the source, so a
/// multi-byte character is simply several no-op positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Program {
    source: Box<str>,
}

impl Program {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The instruction at `position`, or `None` for comments and positions past
    /// the end.
    pub fn instruction(&self, position: usize) -> Option<Instruction> {
        self.source
            .as_bytes()
            .get(position)
            .copied()
            .and_then(Instruction::decode)
    }

    pub fn instructions(&self) -> impl Iterator<Item = Instruction> + '_ {
        self.source.bytes().filter_map(Instruction::decode)
    }

    /// Number of meaningful instructions, which is what a leaderboard scores as
    /// code size.
    pub fn size(&self) -> usize {
        self.instructions().count()
    }

    /// Scans forward from the `[` at `start` for its partner.
    pub fn find_loop_end(&self, start: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 1usize;
        let mut position = start;

        loop {
            position += 1;
            match *bytes.get(position)? {
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(position);
                    }
                }
                _ => {}
            }
        }
    }

    /// Scans backward from the `]` at `end` for its partner.
    pub fn find_loop_start(&self, end: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 1usize;
        let mut position = end;

        loop {
            position = position.checked_sub(1)?;
            match bytes[position] {
                b']' => depth += 1,
                b'[' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(position);
                    }
                }
                _ => {}
            }
        }
    }
}

impl From<&str> for Program {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Program {
    fn from(source: String) -> Self {
        Self {
            source: source.into_boxed_str(),
        }
    }
}

impl FromStr for Program {
    type Err = Infallible;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(source))
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
