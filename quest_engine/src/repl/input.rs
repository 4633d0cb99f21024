//! Terminal input handling for the REPL.
//!
//! Wraps rustyline when attached to a terminal and plain stdin otherwise, and
//! validates the raw text the player types before the core ever sees it.

use std::io::{self, IsTerminal, Write};

use log::{info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::command::ItemSelection;

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Problems with a typed menu choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Please enter a number!")]
    Empty,
    #[error("That's not a number! Please enter a number.")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}

/// Validate a typed menu choice against a menu of `max` entries.
///
/// # Errors
/// - `Empty` for blank input, `NotANumber` for anything that isn't an integer,
///   `OutOfRange` for integers outside `1..=max`
pub fn parse_choice(input: &str, max: usize) -> Result<usize, ChoiceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChoiceError::Empty);
    }
    let number: i64 = trimmed.parse().map_err(|_| ChoiceError::NotANumber)?;
    usize::try_from(number)
        .ok()
        .filter(|n| (1..=max).contains(n))
        .ok_or(ChoiceError::OutOfRange { max })
}

/// Interpret the answer to "use which item?".
///
/// Anything that isn't `cancel` or a positive number becomes slot 0, which the
/// core rejects as out of range.
pub fn parse_item_selection(input: &str) -> ItemSelection {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("cancel") {
        return ItemSelection::Cancel;
    }
    ItemSelection::Slot(trimmed.parse().unwrap_or(0))
}

/// Reads player input from whichever backend suits the terminal.
pub struct InputManager {
    backend: Backend,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Use rustyline if stdin is a terminal and the editor starts; plain stdin otherwise.
    pub fn new() -> Self {
        let backend = if io::stdin().is_terminal() {
            match DefaultEditor::new() {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };

        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    ///
    /// # Errors
    /// - on IO failure from plain stdin
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(DefaultEditor),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => match editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(err) = editor.add_history_entry(line.as_str()) {
                            warn!("failed to append to history: {err}");
                        }
                    }
                    Ok(InputEvent::Line(line))
                },
                Err(err) => convert_readline_error(err),
            },
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;

        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }

        Ok(InputEvent::Line(self.buffer.trim_end_matches(['\n', '\r']).to_string()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert_eq!(result, InputEvent::Interrupted);
    }

    #[test]
    fn choice_validation_matches_menu_bounds() {
        assert_eq!(parse_choice(" 3 ", 8), Ok(3));
        assert_eq!(parse_choice("", 8), Err(ChoiceError::Empty));
        assert_eq!(parse_choice("   ", 8), Err(ChoiceError::Empty));
        assert_eq!(parse_choice("north", 8), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("0", 8), Err(ChoiceError::OutOfRange { max: 8 }));
        assert_eq!(parse_choice("-2", 5), Err(ChoiceError::OutOfRange { max: 5 }));
        assert_eq!(parse_choice("9", 8), Err(ChoiceError::OutOfRange { max: 8 }));
    }

    #[test]
    fn choice_errors_read_like_prompts() {
        assert_eq!(
            ChoiceError::OutOfRange { max: 6 }.to_string(),
            "Please enter a number between 1 and 6."
        );
    }

    #[test]
    fn item_selection_parsing() {
        assert_eq!(parse_item_selection("cancel"), ItemSelection::Cancel);
        assert_eq!(parse_item_selection(" CANCEL\n"), ItemSelection::Cancel);
        assert_eq!(parse_item_selection("2"), ItemSelection::Slot(2));
        assert_eq!(parse_item_selection("potion"), ItemSelection::Slot(0));
    }
}
