//! User-facing text for the terminal session.
//!
//! Every line the session prints comes from a [`Messages`] value. The
//! English defaults can be overridden from a JSON object; missing keys
//! fall back to the defaults, so a file only needs the strings it changes.
//!
//! Templates use `{key}` placeholders, filled by [`Messages::fill`].

use serde::Deserialize;

/// The full set of session strings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// First line of every session.
    pub welcome: String,
    /// Asks for `W H`.
    pub field_prompt: String,
    /// Confirms the field. Placeholders: `{width}`, `{height}`.
    pub field_created: String,
    /// Field input was not two positive integers.
    pub invalid_field: String,
    /// Header above the main menu.
    pub menu_prompt: String,
    /// Main menu option 1.
    pub menu_add_car: String,
    /// Main menu option 2.
    pub menu_run: String,
    /// Post-run option 1.
    pub menu_start_over: String,
    /// Post-run option 2.
    pub menu_exit: String,
    /// A menu answer other than `1` or `2`.
    pub invalid_choice: String,
    /// Asks for the car name.
    pub name_prompt: String,
    /// Name rejected. Placeholder: `{reason}`.
    pub invalid_name: String,
    /// Asks for `x y Direction`. Placeholder: `{name}`.
    pub position_prompt: String,
    /// Position line did not have three parts.
    pub invalid_position_format: String,
    /// `x` or `y` was not an integer.
    pub invalid_coordinates: String,
    /// Direction was not one of `N`, `E`, `S`, `W`.
    pub invalid_direction: String,
    /// Position is off the field. Placeholder: `{reason}`.
    pub position_out_of_bounds: String,
    /// Asks for the command string. Placeholder: `{name}`.
    pub commands_prompt: String,
    /// Command string contained something other than `L`, `R`, `F`.
    pub invalid_commands: String,
    /// The simulation refused the car. Placeholder: `{reason}`.
    pub car_rejected: String,
    /// Header above the car listing.
    pub car_list_header: String,
    /// Header above the run results.
    pub results_header: String,
    /// Printed on exit.
    pub goodbye: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "Welcome to Auto Driving Car Simulation!".into(),
            field_prompt: "Please enter the width and height of the simulation field in x y format:"
                .into(),
            field_created: "You have created a field of {width} x {height}.".into(),
            invalid_field: "Invalid input. Please enter two positive integers separated by a space."
                .into(),
            menu_prompt: "Please choose from the following options:".into(),
            menu_add_car: "[1] Add a car to field".into(),
            menu_run: "[2] Run simulation".into(),
            menu_start_over: "[1] Start over".into(),
            menu_exit: "[2] Exit".into(),
            invalid_choice: "Invalid choice. Please enter 1 or 2.".into(),
            name_prompt: "Please enter the name of the car:".into(),
            invalid_name: "Invalid name: {reason}.".into(),
            position_prompt: "Please enter initial position of car {name} in x y Direction format:"
                .into(),
            invalid_position_format: "Invalid input. Please enter in the format 'x y Direction'."
                .into(),
            invalid_coordinates: "Invalid input. Please enter integers for x and y.".into(),
            invalid_direction: "Invalid direction. Please enter N, S, E, or W.".into(),
            position_out_of_bounds: "Invalid position: {reason}.".into(),
            commands_prompt: "Please enter the commands for car {name}:".into(),
            invalid_commands: "Invalid commands. Please enter only L, R, F.".into(),
            car_rejected: "Could not add car: {reason}.".into(),
            car_list_header: "Your current list of cars are:".into(),
            results_header: "After simulation, the result is:".into(),
            goodbye: "Thank you for running the simulation. Goodbye!".into(),
        }
    }
}

impl Messages {
    /// Parse overrides from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace each `{key}` in `template` with its value.
    pub fn fill(template: &str, values: &[(&str, String)]) -> String {
        let mut out = template.to_string();
        for (key, value) in values {
            out = out.replace(&format!("{{{key}}}"), value);
        }
        out
    }
}
