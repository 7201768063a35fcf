// Shared helpers for the interactive loop
pub mod input;
pub mod formatting;

pub use input::Input;
pub use formatting::{format_record, format_table};

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug)]
pub enum CliError {
    DatabaseError(String),
    ValidationError(String),
    IoError(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            CliError::ValidationError(msg) => write!(f, "{}", msg),
            CliError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::DatabaseError(err.to_string())
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    use colored::Colorize;
    println!("{}", message.green());
}

/// Print an info message
pub fn print_info(message: &str) {
    use colored::Colorize;
    println!("{}", message.bright_cyan());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    use colored::Colorize;
    println!("{}", message.yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    use colored::Colorize;
    eprintln!("{}", format!("✗ {}", message).red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CliError::DatabaseError("locked".to_string()).to_string(),
            "Database error: locked"
        );
        assert_eq!(CliError::ValidationError("bad".to_string()).to_string(), "bad");
        assert_eq!(
            CliError::from(anyhow::anyhow!("gone")).to_string(),
            "Database error: gone"
        );
    }
}
