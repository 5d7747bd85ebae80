//! Scores candidate programs for a puzzle.
//!
//! Every candidate runs against the same batch of cases, generated from a
//! freshly seeded [`Sfc32`] before anything runs. A candidate that produces
//! the wrong output or traps on any case is rejected; the rest are ranked by
//! the geometric mean of code size, peak tape length and total steps.

mod report;

pub use report::*;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    executor::execute,
    limits::Limits,
    program::Program,
    random::{Sfc32, LEADERBOARD_SEED},
    step::Cell,
};

/// Programs with more instructions than this are not accepted by default.
pub const DEFAULT_MAX_SIZE: usize = 0xFF;

/// One test case: an input and the output a correct program must produce.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Case {
    pub input: Vec<Cell>,
    pub expected: Vec<Cell>,
}

impl Case {
    pub fn new(input: Vec<Cell>, expected: Vec<Cell>) -> Self {
        Self { input, expected }
    }

    /// A case whose expected output is its input.
    pub fn echo(input: Vec<Cell>) -> Self {
        Self {
            expected: input.clone(),
            input,
        }
    }
}

impl From<(Vec<Cell>, Vec<Cell>)> for Case {
    fn from((input, expected): (Vec<Cell>, Vec<Cell>)) -> Self {
        Self::new(input, expected)
    }
}

/// A program submitted to a leaderboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub program: Program,
    pub entrant: String,
}

impl Candidate {
    pub fn new(source: &str, entrant: &str) -> Self {
        Self {
            program: Program::new(source),
            entrant: entrant.to_owned(),
        }
    }
}

impl From<(&str, &str)> for Candidate {
    fn from((source, entrant): (&str, &str)) -> Self {
        Self::new(source, entrant)
    }
}

/// A named puzzle: how many cases to run and how to make them.
pub struct Puzzle<G> {
    name: String,
    case_count: usize,
    generator: G,
    limits: Limits,
    max_size: usize,
}

impl<G> Puzzle<G>
where
    G: FnMut(&mut Sfc32) -> Case,
{
    pub fn new(name: impl Into<String>, case_count: usize, generator: G) -> Self {
        Self {
            name: name.into(),
            case_count,
            generator,
            limits: Limits::default(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reseeds and generates this puzzle's cases. Calling this twice gives the
    /// same cases.
    pub fn cases(&mut self) -> Vec<Case> {
        let [a, b, c, d] = LEADERBOARD_SEED;
        let mut rng = Sfc32::new(a, b, c, d);
        (0..self.case_count)
            .map(|_| (self.generator)(&mut rng))
            .collect()
    }

    /// The first case, as shown to someone attempting the puzzle.
    pub fn preview(&mut self) -> Option<Case> {
        self.cases().into_iter().next()
    }

    pub fn evaluate(&mut self, candidates: &[Candidate]) -> Report {
        if candidates.is_empty() {
            return Report::NoCandidates {
                name: self.name.clone(),
            };
        }

        let cases = self.cases();
        let mut standings = Vec::new();
        let mut rejected = Vec::new();

        for (index, candidate) in candidates.iter().enumerate() {
            let id = index + 1;
            match self.score(candidate, &cases) {
                Ok((size, tape, steps)) => {
                    debug!(
                        puzzle = %self.name,
                        entrant = %candidate.entrant,
                        size,
                        tape,
                        steps,
                        "candidate passed"
                    );
                    standings.push(Standing::new(id, &candidate.entrant, size, tape, steps));
                }
                Err(reason) => {
                    warn!(
                        puzzle = %self.name,
                        entrant = %candidate.entrant,
                        %reason,
                        "candidate rejected"
                    );
                    rejected.push(Rejected {
                        id,
                        entrant: candidate.entrant.clone(),
                        program: candidate.program.source().to_owned(),
                        reason,
                    });
                }
            }
        }

        standings.sort_by(|a, b| a.score.total_cmp(&b.score));

        Report::Ranked(Leaderboard {
            name: self.name.clone(),
            best: Best::of(&standings),
            standings,
            rejected,
        })
    }

    /// Runs one candidate against every case, stopping at the first failure.
    fn score(&self, candidate: &Candidate, cases: &[Case]) -> Result<(usize, usize, u64), Rejection> {
        let size = candidate.program.size();
        if size > self.max_size {
            return Err(Rejection::TooLarge {
                size,
                max: self.max_size,
            });
        }

        let mut tape = 1;
        let mut steps = 0u64;

        for case in cases {
            let result = execute(&candidate.program, &case.input, &self.limits).map_err(|fault| {
                Rejection::Fault {
                    input: case.input.clone(),
                    fault,
                }
            })?;

            if result.output != case.expected {
                return Err(Rejection::Mismatch {
                    input: case.input.clone(),
                    expected: case.expected.clone(),
                    actual: result.output,
                });
            }

            tape = tape.max(result.tape);
            steps += result.steps;
        }

        Ok((size, tape, steps))
    }
}

/// Evaluates `candidates` on `case_count` cases from `generator` with default
/// limits.
pub fn evaluate<G>(name: &str, case_count: usize, generator: G, candidates: &[Candidate]) -> Report
where
    G: FnMut(&mut Sfc32) -> Case,
{
    Puzzle::new(name, case_count, generator).evaluate(candidates)
}
