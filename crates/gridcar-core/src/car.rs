//! The car state machine.
//!
//! A [`Car`] holds its position, heading, instruction cursor and liveness,
//! and executes at most one instruction per [`execute_one_step`] call.
//! It never leaves the field: a forward move whose destination is off the
//! field is absorbed (the instruction is consumed, the position stays).
//!
//! [`execute_one_step`]: Car::execute_one_step

use std::fmt;

use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::field::{Field, Position};
use crate::heading::Heading;
use crate::id::CarName;
use crate::instruction::{parse_program, program_to_string, Instruction, Program};

/// What a single [`Car::execute_one_step`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The car was stopped by a collision; nothing changed.
    Inactive,
    /// The instruction cursor is at the end; nothing changed.
    Exhausted,
    /// An `L` or `R` was applied; the car now faces this heading.
    Turned(Heading),
    /// An `F` moved the car.
    Moved {
        /// Position before the move.
        from: Position,
        /// Position after the move.
        to: Position,
    },
    /// An `F` pointed off the field; the car stayed here.
    Blocked(Position),
}

impl StepOutcome {
    /// Whether an instruction was consumed by this step.
    pub fn consumed_instruction(self) -> bool {
        !matches!(self, StepOutcome::Inactive | StepOutcome::Exhausted)
    }
}

/// A car on the field, driven by its own instruction sequence.
///
/// Cars start active. The only way to become inactive is
/// [`deactivate`](Car::deactivate), called by collision resolution; an
/// inactive car never changes state again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    name: CarName,
    position: Position,
    heading: Heading,
    program: Program,
    cursor: usize,
    active: bool,
}

impl Car {
    /// Create an active car at the start of its program.
    ///
    /// The position is not checked here; registration into a simulation
    /// rejects cars placed off the field.
    pub fn new(name: CarName, position: Position, heading: Heading, program: Program) -> Self {
        Self {
            name,
            position,
            heading,
            program,
            cursor: 0,
            active: true,
        }
    }

    /// Build a car from raw collaborator input.
    ///
    /// Validates the name, heading letter and command string.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcar_core::{Car, Heading, Position};
    ///
    /// let car = Car::parse("A", 1, 2, 'N', "FFRFF").unwrap();
    /// assert_eq!(car.position(), Position::new(1, 2));
    /// assert_eq!(car.heading(), Heading::North);
    /// assert_eq!(car.to_string(), "A, (1,2) N, FFRFF");
    /// ```
    pub fn parse(
        name: &str,
        x: i32,
        y: i32,
        heading: char,
        commands: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            CarName::new(name)?,
            Position::new(x, y),
            Heading::try_from(heading)?,
            parse_program(commands)?,
        ))
    }

    /// The car's name.
    pub fn name(&self) -> &CarName {
        &self.name
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// The full instruction sequence.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Index of the next instruction to execute, in `0..=program().len()`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// `false` once the car has been stopped by a collision.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// `true` when every instruction has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.program.len()
    }

    /// Rotate a quarter-turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotate a quarter-turn clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// The instruction at the cursor, or `None` once exhausted.
    pub fn peek_next_instruction(&self) -> Option<Instruction> {
        self.program.get(self.cursor).copied()
    }

    /// Stop the car permanently.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Consume and apply the next instruction against `field`.
    ///
    /// No-op when the car is inactive or its program is exhausted.
    pub fn execute_one_step(&mut self, field: &Field) -> StepOutcome {
        if !self.active {
            return StepOutcome::Inactive;
        }
        let Some(instruction) = self.peek_next_instruction() else {
            return StepOutcome::Exhausted;
        };
        self.cursor += 1;
        trace!(car = %self.name, %instruction, cursor = self.cursor, "execute");

        match instruction {
            Instruction::Left => {
                self.turn_left();
                StepOutcome::Turned(self.heading)
            }
            Instruction::Right => {
                self.turn_right();
                StepOutcome::Turned(self.heading)
            }
            Instruction::Forward => {
                let from = self.position;
                match from.step(self.heading).filter(|to| field.contains(*to)) {
                    Some(to) => {
                        self.position = to;
                        StepOutcome::Moved { from, to }
                    }
                    None => {
                        debug!(
                            car = %self.name,
                            position = %from,
                            heading = %self.heading,
                            "move out of bounds; position not updated"
                        );
                        StepOutcome::Blocked(from)
                    }
                }
            }
        }
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.name,
            self.position,
            self.heading,
            program_to_string(&self.program)
        )
    }
}
