use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, warn};

use crate::engine::constants::NUMBER_COUNT;
use crate::game::errors::GameError;
use crate::game::numbers::{SourceNumbers, Target};
use crate::game::pools::validate_large_count;

/// Answer to the large-count prompt that switches to manual entry.
pub const MANUAL_ESCAPE: i64 = -1;

const LARGE_PROMPT: &str =
    "Enter a number between 0 and 4, or -1 to enter your own numbers and target: ";
const LARGE_RETRY: &str = "Please enter how many numbers you would like from the large set: ";
const TARGET_PROMPT: &str = "Please enter a target number (101-999): ";

/// How the player wants the tiles chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupChoice {
    Random { large: usize },
    Manual,
}

/// Line-based interactive prompts. Invalid answers are reported and asked
/// again; only closed input or I/O failures end the dialogue.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// # Errors
    ///
    /// Returns an error if input closes or an I/O operation fails.
    pub fn choose_setup(&mut self) -> Result<SetupChoice, GameError> {
        writeln!(self.output, "How many large numbers would you like?")?;

        let mut prompt = LARGE_PROMPT;
        loop {
            let attempt = self.read_value::<i64>(prompt).and_then(|n| {
                if n == MANUAL_ESCAPE {
                    Ok(SetupChoice::Manual)
                } else {
                    validate_large_count(n).map(|large| SetupChoice::Random { large })
                }
            });

            match attempt {
                Ok(choice) => {
                    debug!("Setup choice: {:?}", choice);
                    return Ok(choice);
                }
                Err(e) if e.is_recoverable() => self.reject(&e)?,
                Err(e) => return Err(e),
            }
            prompt = LARGE_RETRY;
        }
    }

    /// Ask for six tiles one at a time, starting over if the set as a whole
    /// could not have come from the pools.
    ///
    /// # Errors
    ///
    /// Returns an error if input closes or an I/O operation fails.
    pub fn read_numbers(&mut self) -> Result<SourceNumbers, GameError> {
        loop {
            let mut values = [0u64; NUMBER_COUNT];
            for (i, slot) in values.iter_mut().enumerate() {
                let prompt = format!("Please input your numbers ({}): ", NUMBER_COUNT - i);
                *slot = loop {
                    match self.read_value::<u64>(&prompt) {
                        Ok(value) => break value,
                        Err(e) if e.is_recoverable() => self.reject(&e)?,
                        Err(e) => return Err(e),
                    }
                };
            }

            match SourceNumbers::new(values) {
                Ok(numbers) => return Ok(numbers),
                Err(e) if e.is_recoverable() => self.reject(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// # Errors
    ///
    /// Returns an error if input closes or an I/O operation fails.
    pub fn read_target(&mut self) -> Result<Target, GameError> {
        loop {
            match self.read_value::<i64>(TARGET_PROMPT).and_then(Target::new) {
                Ok(target) => return Ok(target),
                Err(e) if e.is_recoverable() => self.reject(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_value<T: FromStr>(&mut self, prompt: &str) -> Result<T, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }

        let answer = line.trim();
        answer
            .parse()
            .map_err(|_| GameError::NotAnInteger(answer.to_string()))
    }

    fn reject(&mut self, error: &GameError) -> Result<(), GameError> {
        warn!("Rejected input: {}", error);
        writeln!(self.output, "  {}", error)?;
        Ok(())
    }
}
