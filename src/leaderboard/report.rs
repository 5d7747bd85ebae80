use std::fmt;

use serde::Serialize;

use crate::{executor::Fault, step::Cell};

/// Outcome of evaluating a puzzle.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    NoCandidates { name: String },
    Ranked(Leaderboard),
}

impl Report {
    pub fn name(&self) -> &str {
        match self {
            Self::NoCandidates { name } => name,
            Self::Ranked(board) => &board.name,
        }
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        match self {
            Self::NoCandidates { .. } => None,
            Self::Ranked(board) => Some(board),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leaderboard {
    pub name: String,
    /// Passing candidates, best score first.
    pub standings: Vec<Standing>,
    pub rejected: Vec<Rejected>,
    pub best: Best,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position in the submission list.
    pub id: usize,
    pub entrant: String,
    /// Number of meaningful instructions.
    pub size: usize,
    /// Longest tape over all cases.
    pub tape: usize,
    /// Total steps over all cases.
    pub steps: u64,
    pub score: f64,
}

impl Standing {
    pub fn new(id: usize, entrant: &str, size: usize, tape: usize, steps: u64) -> Self {
        Self {
            id,
            entrant: entrant.to_owned(),
            size,
            tape,
            steps,
            score: score(size, tape, steps),
        }
    }
}

/// Geometric mean of size, tape and steps. Lower is better.
pub fn score(size: usize, tape: usize, steps: u64) -> f64 {
    (size as f64 * tape as f64 * steps as f64).cbrt()
}

/// Smallest value in each column, for highlighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Best {
    pub size: usize,
    pub tape: usize,
    pub steps: u64,
}

impl Best {
    pub fn of(standings: &[Standing]) -> Self {
        Self {
            size: standings.iter().map(|s| s.size).min().unwrap_or(0),
            tape: standings.iter().map(|s| s.tape).min().unwrap_or(0),
            steps: standings.iter().map(|s| s.steps).min().unwrap_or(0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rejected {
    pub id: usize,
    pub entrant: String,
    pub program: String,
    pub reason: Rejection,
}

/// Why a candidate was left off the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    TooLarge {
        size: usize,
        max: usize,
    },
    Fault {
        input: Vec<Cell>,
        fault: Fault,
    },
    Mismatch {
        input: Vec<Cell>,
        expected: Vec<Cell>,
        actual: Vec<Cell>,
    },
}

struct Dashed<'a>(&'a [Cell]);

impl fmt::Display for Dashed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { size, max } => {
                write!(f, "program has {size} instructions, more than the allowed {max}")
            }
            Self::Fault { input, fault } => {
                write!(f, "{fault} on input {}", Dashed(input))
            }
            Self::Mismatch {
                input,
                expected,
                actual,
            } => write!(
                f,
                "incorrect output {} vs. {} on input {}",
                Dashed(actual),
                Dashed(expected),
                Dashed(input)
            ),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fault { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

/// Right-aligns `value` in `width` columns, prefixed with `*` when it is the
/// column's best.
struct Marked<T>(T, bool, usize);

impl<T: fmt::Display> fmt::Display for Marked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(value, best, width) = self;
        let width = *width;
        let text = if *best {
            format!("*{value}")
        } else {
            value.to_string()
        };
        write!(f, "{text:>width$}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.name())?;

        let board = match self {
            Self::NoCandidates { .. } => return writeln!(f, "No solutions yet."),
            Self::Ranked(board) => board,
        };

        if !board.standings.is_empty() {
            writeln!(f, "|id|entrant             | size| tape|    speed|")?;
            writeln!(f, "|--|--------------------|-----|-----|---------|")?;
        }
        for standing in &board.standings {
            writeln!(
                f,
                "|{:>2}|{:<20}|{}|{}|{}|",
                standing.id,
                standing.entrant,
                Marked(standing.size, standing.size == board.best.size, 5),
                Marked(standing.tape, standing.tape == board.best.tape, 5),
                Marked(standing.steps, standing.steps == board.best.steps, 9),
            )?;
        }

        for rejected in &board.rejected {
            writeln!(
                f,
                "rejected #{} ({}): {}",
                rejected.id, rejected.entrant, rejected.reason
            )?;
        }

        Ok(())
    }
}
