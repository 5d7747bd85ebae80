pub mod executor;
pub mod input;
pub mod leaderboard;
pub mod limits;
pub mod output;
pub mod program;
pub mod random;
pub mod step;
pub mod tape;

pub use executor::{execute, Fault, RunResult, Trap};
pub use leaderboard::{evaluate, Candidate, Case, Puzzle, Report};
pub use limits::Limits;
pub use program::Program;
pub use step::Cell;
