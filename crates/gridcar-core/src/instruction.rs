//! Car instructions and validated instruction sequences.

use std::fmt;

use smallvec::SmallVec;

use crate::error::ValidationError;

/// A single car instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `L`: quarter-turn counter-clockwise.
    Left,
    /// `R`: quarter-turn clockwise.
    Right,
    /// `F`: move one cell forward if the destination is on the field.
    Forward,
}

impl Instruction {
    /// Single-letter form: `L`, `R` or `F`.
    pub fn as_char(self) -> char {
        match self {
            Instruction::Left => 'L',
            Instruction::Right => 'R',
            Instruction::Forward => 'F',
        }
    }
}

impl TryFrom<char> for Instruction {
    type Error = ValidationError;

    /// Parses a token. The `index` of the returned error is always 0;
    /// [`parse_program`] fills in the real position.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' => Ok(Instruction::Left),
            'R' => Ok(Instruction::Right),
            'F' => Ok(Instruction::Forward),
            token => Err(ValidationError::InvalidInstruction { token, index: 0 }),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered instruction sequence.
///
/// Inline storage covers the short command strings typed at a prompt;
/// longer programs spill to the heap.
pub type Program = SmallVec<[Instruction; 16]>;

/// Parse a command string such as `"FFRFF"` into a [`Program`].
///
/// Every character must be one of `L`, `R`, `F`. The empty string is a
/// valid, empty program.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidInstruction`] naming the first
/// offending character and its index.
pub fn parse_program(commands: &str) -> Result<Program, ValidationError> {
    commands
        .chars()
        .enumerate()
        .map(|(index, c)| {
            Instruction::try_from(c)
                .map_err(|_| ValidationError::InvalidInstruction { token: c, index })
        })
        .collect()
}

/// Render a program back into its command-string form.
pub fn program_to_string(program: &[Instruction]) -> String {
    program.iter().map(|i| i.as_char()).collect()
}
