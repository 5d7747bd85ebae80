//! The interpreter.
//!
//! Every run is bounded by [`Limits`]: each meaningful instruction costs one
//! step, so even a program that never halts stops with
//! [`Trap::StepLimitExceeded`].

mod trap;

pub use trap::*;

use serde::Serialize;
use tracing::trace;

use crate::{
    input::{Input, NoInput},
    limits::Limits,
    output::{BoundedOutput, IgnoreOutput, Output},
    program::{Instruction, Program},
    step::Cell,
    tape::{GrowableTape, Tape},
};

/// What a successful run leaves behind.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct RunResult {
    pub output: Vec<Cell>,
    /// Final tape length, i.e. the peak memory used.
    pub tape: usize,
    pub steps: u64,
}

#[derive(Clone, Debug)]
pub struct Executor<'a, U, I, O> {
    program: &'a Program,
    instruction_index: usize,
    /// Loops entered through a `[` and not yet left through their `]`.
    open_loops: usize,
    steps: u64,
    limits: Limits,
    tape: U,
    input: I,
    output: O,
}

impl<'a, U, I, O> Executor<'a, U, I, O> {
    pub fn new(program: &'a Program, limits: Limits, tape: U, input: I, output: O) -> Self {
        Self {
            program,
            instruction_index: 0,
            open_loops: 0,
            steps: 0,
            limits,
            tape,
            input,
            output,
        }
    }

    pub fn is_done(&self) -> bool {
        self.instruction_index >= self.program.len()
    }

    pub fn instruction_index(&self) -> usize {
        self.instruction_index
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn tape(&self) -> &U {
        &self.tape
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Executes the next meaningful instruction, skipping any comments before
    /// it.
    ///
    /// Returns `Ok(true)` if the program was already complete when `.step()`
    /// was called. After an error the executor stays on the instruction that
    /// trapped.
    pub fn step(&mut self) -> Result<bool, Trap>
    where
        U: Tape,
        I: Iterator<Item = Cell>,
        O: Output,
    {
        let current = loop {
            if self.is_done() {
                return Ok(true);
            }
            match self.program.instruction(self.instruction_index) {
                Some(instruction) => break instruction,
                None => self.instruction_index += 1,
            }
        };

        let Limits {
            max_cell,
            on_overflow,
            ..
        } = self.limits;

        match current {
            Instruction::Inc => {
                *self.tape = on_overflow.inc(*self.tape, max_cell)?;
            }
            Instruction::Dec => {
                *self.tape = on_overflow.dec(*self.tape, max_cell)?;
            }
            Instruction::Shl => {
                self.tape.shift(-1)?;
            }
            Instruction::Shr => {
                self.tape.shift(1)?;
            }
            Instruction::Read => {
                let value = self.input.next().unwrap_or_default();
                *self.tape = on_overflow.admit(value, max_cell)?;
            }
            Instruction::Write => {
                self.output.push(*self.tape)?;
            }
            Instruction::LoopStart => {
                if *self.tape == 0 {
                    self.instruction_index = self
                        .program
                        .find_loop_end(self.instruction_index)
                        .ok_or(Trap::UnmatchedBracket { open: true })?;
                } else {
                    self.open_loops += 1;
                }
            }
            Instruction::LoopEnd => {
                // Only a `[` that was entered can be waiting for this `]`.
                if self.open_loops == 0 {
                    return Err(Trap::UnmatchedBracket { open: false });
                }
                if *self.tape != 0 {
                    self.instruction_index = self
                        .program
                        .find_loop_start(self.instruction_index)
                        .ok_or(Trap::UnmatchedBracket { open: false })?;
                } else {
                    self.open_loops -= 1;
                }
            }
        };

        self.steps += 1;
        if self.steps >= self.limits.max_steps {
            return Err(Trap::StepLimitExceeded);
        }

        self.instruction_index += 1;
        Ok(false)
    }

    /// Runs this executor to completion.
    pub fn run(&mut self) -> Result<(), Trap>
    where
        U: Tape,
        I: Iterator<Item = Cell>,
        O: Output,
    {
        while !self.step()? {}
        Ok(())
    }
}

impl<'a, 'b> Executor<'a, GrowableTape, Input<'b>, BoundedOutput> {
    pub fn with_input(program: &'a Program, input: &'b [Cell], limits: Limits) -> Self {
        Self::new(
            program,
            limits,
            GrowableTape::new(&limits),
            Input::new(input),
            BoundedOutput::new(limits.max_output),
        )
    }

    pub fn into_result(self) -> RunResult {
        RunResult {
            tape: self.tape.len(),
            steps: self.steps,
            output: self.output.into_values(),
        }
    }

    pub fn into_fault(self, trap: Trap) -> Fault {
        Fault {
            trap,
            ip: self.instruction_index,
            steps: self.steps,
            output: self.output.into_values(),
        }
    }
}

impl<'a> Executor<'a, GrowableTape, NoInput<Cell>, IgnoreOutput> {
    pub fn new_without_io(program: &'a Program, limits: Limits) -> Self {
        Self::new(
            program,
            limits,
            GrowableTape::new(&limits),
            NoInput::new(),
            IgnoreOutput,
        )
    }
}

/// Runs `program` against `input` from a fresh tape.
pub fn execute(program: &Program, input: &[Cell], limits: &Limits) -> Result<RunResult, Fault> {
    let mut executor = Executor::with_input(program, input, *limits);

    match executor.run() {
        Ok(()) => Ok(executor.into_result()),
        Err(trap) => {
            let fault = executor.into_fault(trap);
            trace!(%fault, "run trapped");
            Err(fault)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{step::Overflow, tape::LeftEdge};

    fn run(source: &str, input: &[Cell]) -> Result<RunResult, Fault> {
        execute(&Program::new(source), input, &Limits::default())
    }

    fn trap(source: &str, input: &[Cell]) -> Trap {
        run(source, input).unwrap_err().trap
    }

    #[test]
    fn empty_program() {
        let result = run("", &[1, 2]).unwrap();
        assert_eq!(result, RunResult { output: vec![], tape: 1, steps: 0 });
    }

    #[test]
    fn comments_cost_nothing() {
        let plain = run(",.", &[9]).unwrap();
        let commented = run("read , then write . done", &[9]).unwrap();
        assert_eq!(plain, commented);
        assert_eq!(commented.steps, 2);
    }

    #[test]
    fn read_past_end_of_input_yields_zero() {
        let result = run(",.,.,.", &[7]).unwrap();
        assert_eq!(result.output, vec![7, 0, 0]);
    }

    #[test]
    fn cat_copies_input() {
        let result = run(",[.,]", &[1, 2, 3]).unwrap();
        assert_eq!(result.output, vec![1, 2, 3]);
        // `,` `[` then three rounds of `.` `,` `]`.
        assert_eq!(result.steps, 11);
        assert_eq!(result.tape, 1);
    }

    #[test]
    fn tape_length_tracks_the_furthest_cell() {
        let result = run(">>><<>", &[]).unwrap();
        assert_eq!(result.tape, 4);
        assert_eq!(result.steps, 6);
    }

    #[test]
    fn skipped_loop_costs_one_step() {
        let result = run("[+++.]+.", &[]).unwrap();
        assert_eq!(result.output, vec![1]);
        assert_eq!(result.steps, 3);
    }

    #[test]
    fn nested_loops() {
        // 3 * 4 = 12.
        let result = run("+++[>++++[>+<-]<-]>>.", &[]).unwrap();
        assert_eq!(result.output, vec![12]);
        assert_eq!(result.tape, 3);
    }

    #[test]
    fn cells_are_wide_by_default() {
        let result = run(",[->+++<]>.", &[99]).unwrap();
        assert_eq!(result.output, vec![297]);
    }

    #[test]
    fn strict_data_bounds() {
        assert_eq!(trap("-", &[]), Trap::DataUnderflow);

        let limits = Limits::strict_byte();
        let fault = execute(&Program::new(",+"), &[255], &limits).unwrap_err();
        assert_eq!(fault.trap, Trap::DataOverflow);
        assert_eq!(fault.ip, 1);
        assert_eq!(fault.steps, 1);

        let fault = execute(&Program::new(","), &[256], &limits).unwrap_err();
        assert_eq!(fault.trap, Trap::DataOverflow);
    }

    #[test]
    fn byte_cells_wrap() {
        let result = execute(&Program::new("-.+."), &[], &Limits::byte()).unwrap();
        assert_eq!(result.output, vec![255, 0]);
    }

    #[test]
    fn saturating_cells_clamp() {
        let limits = Limits {
            on_overflow: Overflow::Saturate,
            ..Limits::strict_byte()
        };
        let result = execute(&Program::new("-.,+."), &[255], &limits).unwrap();
        assert_eq!(result.output, vec![0, 255]);
    }

    #[test]
    fn pointer_bounds() {
        assert_eq!(trap("<", &[]), Trap::PointerUnderflow);

        let limits = Limits {
            max_address: 3,
            ..Limits::default()
        };
        let fault = execute(&Program::new(">>>>"), &[], &limits).unwrap_err();
        assert_eq!(fault.trap, Trap::PointerOverflow);
        assert_eq!(fault.ip, 3);
        assert_eq!(fault.steps, 3);
    }

    #[test]
    fn left_edge_can_grow() {
        let limits = Limits {
            left_edge: LeftEdge::Grow,
            ..Limits::default()
        };
        let result = execute(&Program::new("+<++>."), &[], &limits).unwrap();
        assert_eq!(result.output, vec![1]);
        assert_eq!(result.tape, 2);
    }

    #[test]
    fn bare_closing_bracket_is_unmatched() {
        assert_eq!(trap("]", &[]), Trap::UnmatchedBracket { open: false });
        assert_eq!(trap(",]", &[5]), Trap::UnmatchedBracket { open: false });
        assert_eq!(trap("+[-]]", &[]), Trap::UnmatchedBracket { open: false });
    }

    #[test]
    fn unmatched_opening_bracket_is_found_when_skipping() {
        let fault = run("[[]", &[]).unwrap_err();
        assert_eq!(fault.trap, Trap::UnmatchedBracket { open: true });
        assert_eq!(fault.ip, 0);
    }

    #[test]
    fn unneeded_partners_are_never_looked_for() {
        // The loop is entered and the program ends inside it.
        let result = run("+[.-", &[]).unwrap();
        assert_eq!(result.output, vec![1]);
    }

    #[test]
    fn non_terminating_loop_hits_the_step_ceiling() {
        let limits = Limits {
            max_steps: 1000,
            ..Limits::default()
        };
        let fault = execute(&Program::new("+[]"), &[], &limits).unwrap_err();
        assert_eq!(fault.trap, Trap::StepLimitExceeded);
        assert_eq!(fault.steps, 1000);
    }

    #[test]
    fn step_ceiling_is_exclusive() {
        let limits = Limits {
            max_steps: 4,
            ..Limits::default()
        };
        assert!(execute(&Program::new("+++"), &[], &limits).is_ok());
        let fault = execute(&Program::new("++++"), &[], &limits).unwrap_err();
        assert_eq!(fault.trap, Trap::StepLimitExceeded);
    }

    #[test]
    fn output_overflow_keeps_partial_output() {
        let source = format!("+{}", ".".repeat(1025));
        let fault = run(&source, &[]).unwrap_err();
        assert_eq!(fault.trap, Trap::OutputOverflow);
        assert_eq!(fault.output.len(), 1024);
        assert!(fault.output.iter().all(|&value| value == 1));
        assert_eq!(fault.ip, 1025);
    }

    #[test]
    fn fault_display_names_the_trap() {
        let fault = run("]", &[]).unwrap_err();
        assert_eq!(
            fault.to_string(),
            "`]` found without corresponding `[` at ip=0 after 0 steps"
        );
    }

    #[test]
    fn stepping_by_hand() {
        let program = Program::new("+ + +");
        let mut executor = Executor::new_without_io(&program, Limits::default());
        assert_eq!(executor.step(), Ok(false));
        assert_eq!(executor.step(), Ok(false));
        assert_eq!(executor.step(), Ok(false));
        assert!(executor.is_done());
        assert_eq!(executor.step(), Ok(true));
        assert_eq!(executor.steps(), 3);
        assert_eq!(**executor.tape(), 3);
    }

    #[test]
    fn partial_output_is_visible_between_steps() {
        let program = Program::new(", . x , .");
        let mut executor = Executor::with_input(&program, &[4, 5], Limits::default());
        executor.step().unwrap();
        executor.step().unwrap();
        assert_eq!(executor.output().values(), &[4]);
        assert_eq!(executor.instruction_index(), 3);

        // Comments before the next instruction are skipped in the same step.
        executor.step().unwrap();
        assert_eq!(executor.instruction_index(), 7);
        executor.run().unwrap();
        assert_eq!(executor.output().values(), &[4, 5]);
        assert_eq!(executor.into_result().steps, 4);
    }
}
