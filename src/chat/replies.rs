use crate::budgets::models::BudgetStatus;

pub const HELP_TEXT: &str = "Commands:\n\
1. 'add expense <amount> <category>' - Log a new expense\n\
2. 'check budget <category>' - Check your remaining budget for a category\n\
3. 'advice' - Get financial advice based on your spending\n\
4. 'exit' - Exit the chatbot";

pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' to see the list of available commands.";

/// Shortest round-trip digits. Integral values keep one decimal place
/// (`100.0`); decimal exponents below -4 or from 16 up switch to
/// scientific form with a signed two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let plain = format!("{}", value);
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

pub fn expense_added(amount: f64, category: &str) -> String {
    format!("Expense of {} added to {}!", format_amount(amount), category)
}

pub fn budget_status(status: &BudgetStatus) -> String {
    format!(
        "Category: {}\nBudget Limit: {}\nSpent: {}\nRemaining: {}",
        status.category,
        format_amount(status.budget_limit),
        format_amount(status.spent),
        format_amount(status.remaining)
    )
}

pub fn budget_not_found(category: &str) -> String {
    format!("No budget found for category '{}'", category)
}
