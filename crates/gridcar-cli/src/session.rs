//! The interactive dialogue: field setup, roster entry, run, start over.
//!
//! A [`Session`] reads one line per prompt and re-prompts until the
//! answer validates, so nothing invalid ever reaches the [`Simulation`].
//! End of input at any prompt ends the session without error.

use std::io::{self, BufRead, Write};

use gridcar_core::{
    parse_program, validate_car_name, validate_position, Car, Field, Heading, Position,
    ValidationError,
};
use gridcar_engine::Simulation;
use tracing::{debug, info};

use crate::messages::Messages;

/// Answer to a two-option menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    First,
    Second,
}

/// Why an `x y Direction` line was rejected.
#[derive(Debug)]
enum PlacementError {
    Format,
    Coordinates,
    Direction,
    OutOfBounds(ValidationError),
}

/// One terminal session over an input/output pair.
pub struct Session<'m, R, W> {
    input: R,
    output: W,
    messages: &'m Messages,
    field: Option<Field>,
}

impl<'m, R: BufRead, W: Write> Session<'m, R, W> {
    /// A session that starts by asking for the field size.
    pub fn new(input: R, output: W, messages: &'m Messages) -> Self {
        Self {
            input,
            output,
            messages,
            field: None,
        }
    }

    /// Skip the field prompt and use `field`.
    pub fn with_field(mut self, field: Field) -> Self {
        self.field = Some(field);
        self
    }

    /// Drive the dialogue to completion and hand back the output sink.
    ///
    /// Returns `Err` only for I/O failures on the underlying streams.
    pub fn run(mut self) -> io::Result<W> {
        let m = self.messages;
        self.say(&m.welcome)?;

        let field = match self.field {
            Some(field) => field,
            None => match self.ask_field()? {
                Some(field) => field,
                None => return self.finish(),
            },
        };
        self.say(&Messages::fill(
            &m.field_created,
            &[
                ("width", field.width().to_string()),
                ("height", field.height().to_string()),
            ],
        ))?;
        info!(%field, "session started");

        let mut sim = Simulation::new(field);
        loop {
            let Some(choice) = self.menu(&m.menu_add_car, &m.menu_run)? else {
                break;
            };
            match choice {
                Choice::First => {
                    let Some(car) = self.ask_car(&sim)? else {
                        break;
                    };
                    match sim.add_car(car) {
                        Ok(()) => self.list_cars(&sim)?,
                        Err(e) => {
                            self.say(&Messages::fill(&m.car_rejected, &[("reason", e.to_string())]))?
                        }
                    }
                }
                Choice::Second => {
                    let report = sim.run();
                    self.say(&m.results_header)?;
                    write!(self.output, "{report}")?;
                    match self.menu(&m.menu_start_over, &m.menu_exit)? {
                        Some(Choice::First) => {
                            sim.reset();
                            info!("session restarted");
                        }
                        Some(Choice::Second) => {
                            self.say(&m.goodbye)?;
                            break;
                        }
                        None => break,
                    }
                }
            }
        }
        self.finish()
    }

    fn finish(mut self) -> io::Result<W> {
        self.output.flush()?;
        Ok(self.output)
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn menu(&mut self, first: &str, second: &str) -> io::Result<Option<Choice>> {
        let m = self.messages;
        loop {
            self.say(&m.menu_prompt)?;
            self.say(first)?;
            self.say(second)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.as_str() {
                "1" => return Ok(Some(Choice::First)),
                "2" => return Ok(Some(Choice::Second)),
                _ => self.say(&m.invalid_choice)?,
            }
        }
    }

    fn ask_field(&mut self) -> io::Result<Option<Field>> {
        let m = self.messages;
        loop {
            self.say(&m.field_prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_field(&line) {
                Some(field) => return Ok(Some(field)),
                None => {
                    debug!(input = %line, "rejected field size");
                    self.say(&m.invalid_field)?;
                }
            }
        }
    }

    /// Collect name, placement and commands for one car. Every answer is
    /// validated against `sim` before the next prompt.
    fn ask_car(&mut self, sim: &Simulation) -> io::Result<Option<Car>> {
        let m = self.messages;

        let name = loop {
            self.say(&m.name_prompt)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match validate_car_name(&line, sim.cars().iter().map(|c| c.name().as_str())) {
                Ok(name) => break name,
                Err(e) => {
                    debug!(error = %e, "rejected car name");
                    self.say(&Messages::fill(&m.invalid_name, &[("reason", e.to_string())]))?;
                }
            }
        };
        let name_value = [("name", name.to_string())];

        let (position, heading) = loop {
            self.say(&Messages::fill(&m.position_prompt, &name_value))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_placement(&line, sim.field()) {
                Ok(placement) => break placement,
                Err(e) => {
                    debug!(input = %line, error = ?e, "rejected placement");
                    let text = match e {
                        PlacementError::Format => m.invalid_position_format.clone(),
                        PlacementError::Coordinates => m.invalid_coordinates.clone(),
                        PlacementError::Direction => m.invalid_direction.clone(),
                        PlacementError::OutOfBounds(e) => Messages::fill(
                            &m.position_out_of_bounds,
                            &[("reason", e.to_string())],
                        ),
                    };
                    self.say(&text)?;
                }
            }
        };

        let program = loop {
            self.say(&Messages::fill(&m.commands_prompt, &name_value))?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_program(&line.to_uppercase()) {
                Ok(program) => break program,
                Err(e) => {
                    debug!(error = %e, "rejected commands");
                    self.say(&m.invalid_commands)?;
                }
            }
        };

        Ok(Some(Car::new(name, position, heading, program)))
    }

    fn list_cars(&mut self, sim: &Simulation) -> io::Result<()> {
        let m = self.messages;
        self.say(&m.car_list_header)?;
        for car in sim.cars() {
            writeln!(self.output, "- {car}")?;
        }
        Ok(())
    }
}

/// `W H` as two positive integers.
fn parse_field(line: &str) -> Option<Field> {
    let mut parts = line.split_whitespace();
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    Field::new(w.parse().ok()?, h.parse().ok()?).ok()
}

/// `x y Direction`, direction case-insensitive, position on `field`.
fn parse_placement(line: &str, field: &Field) -> Result<(Position, Heading), PlacementError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, direction] = parts.as_slice() else {
        return Err(PlacementError::Format);
    };
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        return Err(PlacementError::Coordinates);
    };
    let heading: Heading = direction
        .to_uppercase()
        .parse()
        .map_err(|_| PlacementError::Direction)?;
    let position = validate_position(field, x, y).map_err(PlacementError::OutOfBounds)?;
    Ok((position, heading))
}
