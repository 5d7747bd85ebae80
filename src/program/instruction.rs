#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    Inc,
    Dec,
    Shl,
    Shr,
    Read,
    Write,
    /// Jumps past the matching `LoopEnd` when the current cell is zero.
    LoopStart,
    /// Jumps back to the matching `LoopStart` when the current cell is nonzero.
    LoopEnd,
}

impl Instruction {
    /// Decodes a single source byte. Anything outside the eight operators is a
    /// comment and decodes to `None`.
    pub const fn decode(byte: u8) -> Option<Self> {
        match byte {
            b'+' => Some(Self::Inc),
            b'-' => Some(Self::Dec),
            b'<' => Some(Self::Shl),
            b'>' => Some(Self::Shr),
            b',' => Some(Self::Read),
            b'.' => Some(Self::Write),
            b'[' => Some(Self::LoopStart),
            b']' => Some(Self::LoopEnd),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Inc => '+',
            Self::Dec => '-',
            Self::Shl => '<',
            Self::Shr => '>',
            Self::Read => ',',
            Self::Write => '.',
            Self::LoopStart => '[',
            Self::LoopEnd => ']',
        }
    }
}
