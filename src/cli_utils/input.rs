use crate::chat::intent::parse_amount;
use crate::cli_utils::{CliError, CliResult};
use dialoguer::Input as DialoguerInput;

pub const INVALID_PROMPTED_AMOUNT: &str = "Invalid input. Please enter a valid amount.";

/// Input utilities
pub struct Input;

impl Input {
    /// Get a line from user input, empty allowed
    pub fn get_line(prompt: &str) -> CliResult<String> {
        DialoguerInput::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(CliError::from)
    }

    /// Get a non-empty, trimmed string
    pub fn get_string(prompt: &str) -> CliResult<String> {
        let input: String = DialoguerInput::new()
            .with_prompt(prompt)
            .interact_text()?;

        Ok(input.trim().to_string())
    }

    /// Get an expense amount, same rules as the chat grammar
    pub fn get_amount(prompt: &str) -> CliResult<f64> {
        let input: String = DialoguerInput::new()
            .with_prompt(prompt)
            .interact_text()?;

        parse_amount(&input)
            .map_err(|_| CliError::ValidationError(INVALID_PROMPTED_AMOUNT.to_string()))
    }
}
