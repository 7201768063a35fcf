//! Keyword grammar shared by the HTTP endpoint and the interactive loop.
//!
//! ```text
//! add expense <amount> <category...>
//! check budget <category...>
//! advice
//! help
//! ```
//!
//! Keywords are matched case-insensitively anywhere in the message, first
//! match wins in the order above. Arguments are taken by token position from
//! the original text, so categories keep their case.

use thiserror::Error;

pub const ADD_EXPENSE_KEYWORD: &str = "add expense";
pub const CHECK_BUDGET_KEYWORD: &str = "check budget";
pub const ADVICE_KEYWORD: &str = "advice";
pub const HELP_KEYWORD: &str = "help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    AddExpense,
    CheckBudget,
    Advice,
    Help,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    AddExpense { amount: f64, category: String },
    CheckBudget { category: String },
    Advice,
    Help,
    Unknown,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("Invalid amount. Please use 'add expense <amount> <category>'.")]
    InvalidAmount(String),
    #[error("Invalid input. Please use 'add expense <amount> <category>'.")]
    InvalidInput,
    #[error("Please specify a category to check the budget.")]
    MissingCategory,
}

pub fn classify(message: &str) -> IntentKind {
    let lowered = message.to_lowercase();

    if lowered.contains(ADD_EXPENSE_KEYWORD) {
        IntentKind::AddExpense
    } else if lowered.contains(CHECK_BUDGET_KEYWORD) {
        IntentKind::CheckBudget
    } else if lowered.contains(ADVICE_KEYWORD) {
        IntentKind::Advice
    } else if lowered.contains(HELP_KEYWORD) {
        IntentKind::Help
    } else {
        IntentKind::Unknown
    }
}

pub fn parse(message: &str) -> Result<Intent, CommandError> {
    let kind = classify(message);
    tracing::debug!(?kind, "classified message");

    match kind {
        IntentKind::AddExpense => parse_add_expense(message),
        IntentKind::CheckBudget => parse_check_budget(message),
        IntentKind::Advice => Ok(Intent::Advice),
        IntentKind::Help => Ok(Intent::Help),
        IntentKind::Unknown => Ok(Intent::Unknown),
    }
}

fn parse_add_expense(message: &str) -> Result<Intent, CommandError> {
    let parts: Vec<&str> = message.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(CommandError::InvalidInput);
    }

    let amount = parse_amount(parts[2])?;
    let category = parts[3..].join(" ");

    Ok(Intent::AddExpense { amount, category })
}

fn parse_check_budget(message: &str) -> Result<Intent, CommandError> {
    let parts: Vec<&str> = message.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(CommandError::MissingCategory);
    }

    Ok(Intent::CheckBudget {
        category: parts[2..].join(" "),
    })
}

/// Any finite float text is accepted, including zero and negatives.
/// `nan` and `inf` parse as floats but cannot be stored or summed.
pub fn parse_amount(text: &str) -> Result<f64, CommandError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidAmount(text.to_string()))?;

    if !value.is_finite() {
        return Err(CommandError::InvalidAmount(text.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_precedence() {
        assert_eq!(classify("Add Expense 10 food"), IntentKind::AddExpense);
        assert_eq!(classify("CHECK BUDGET food"), IntentKind::CheckBudget);
        assert_eq!(classify("any advice?"), IntentKind::Advice);
        assert_eq!(classify("help me"), IntentKind::Help);
        assert_eq!(classify("hello"), IntentKind::Unknown);
        assert_eq!(classify(""), IntentKind::Unknown);

        // first keyword in precedence order wins, not first in the text
        assert_eq!(classify("help check budget food"), IntentKind::CheckBudget);
        assert_eq!(classify("advice then add expense 3 tea"), IntentKind::AddExpense);
    }

    #[test]
    fn test_add_expense_with_multi_word_category() {
        assert_eq!(
            parse("Add Expense 42.5 groceries and snacks"),
            Ok(Intent::AddExpense {
                amount: 42.5,
                category: "groceries and snacks".to_string(),
            })
        );
    }

    #[test]
    fn test_add_expense_collapses_whitespace_in_category() {
        assert_eq!(
            parse("add expense 7   Coffee    Beans "),
            Ok(Intent::AddExpense {
                amount: 7.0,
                category: "Coffee Beans".to_string(),
            })
        );
    }

    #[test]
    fn test_add_expense_rejects_non_numeric_amount() {
        assert_eq!(
            parse("add expense abc food"),
            Err(CommandError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn test_add_expense_requires_four_tokens() {
        assert_eq!(parse("add expense"), Err(CommandError::InvalidInput));
        assert_eq!(parse("add expense 12"), Err(CommandError::InvalidInput));
    }

    #[test]
    fn test_add_expense_uses_token_positions() {
        // the keyword does not have to lead, arguments are still positional
        assert_eq!(
            parse("please add expense 5 food"),
            Err(CommandError::InvalidAmount("expense".to_string()))
        );
    }

    #[test]
    fn test_negative_and_zero_amounts_parse() {
        assert_eq!(
            parse("add expense -3.25 refund"),
            Ok(Intent::AddExpense {
                amount: -3.25,
                category: "refund".to_string(),
            })
        );
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_non_finite_amounts_are_rejected() {
        for text in ["nan", "NaN", "inf", "-inf", "infinity", "+Infinity"] {
            assert_eq!(parse_amount(text), Err(CommandError::InvalidAmount(text.to_string())));
        }
        assert_eq!(
            parse("add expense inf food"),
            Err(CommandError::InvalidAmount("inf".to_string()))
        );
        // overflows to infinity
        assert!(parse_amount("1e400").is_err());
    }

    #[test]
    fn test_check_budget() {
        assert_eq!(
            parse("check budget Eating Out"),
            Ok(Intent::CheckBudget {
                category: "Eating Out".to_string(),
            })
        );
        assert_eq!(parse("check budget"), Err(CommandError::MissingCategory));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CommandError::InvalidAmount("x".to_string()).to_string(),
            "Invalid amount. Please use 'add expense <amount> <category>'."
        );
        assert_eq!(
            CommandError::InvalidInput.to_string(),
            "Invalid input. Please use 'add expense <amount> <category>'."
        );
    }
}
