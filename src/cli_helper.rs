use anyhow::Result;

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::chat::intent::{parse, CommandError, Intent};
use crate::utils::app_config::{AppConfig, StoreArgs};

pub const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// Initialize AppConfig for CLI operations
pub fn initialize_app_config(args: &StoreArgs) -> Result<AppConfig> {
    AppConfig::from_args(args)
}

/// Execute an action through the ActionRouter
pub async fn call_action_router(input: ActionRouterInput, app_config: AppConfig) -> Result<ActionRouterOutput> {
    input.process(app_config).await
}

/// What the interactive loop should do with one typed line.
#[derive(Debug, Clone, PartialEq)]
pub enum LinePlan {
    Exit,
    Run(Intent),
    /// "add expense" without usable arguments, ask for amount and category
    PromptExpense,
    /// "check budget" without a category, ask for it
    PromptCategory,
    Reply(String),
}

/// Same grammar as the HTTP endpoint; missing arguments turn into prompts
/// instead of usage errors.
pub fn plan_line(line: &str) -> LinePlan {
    let trimmed = line.trim();
    if EXIT_COMMANDS.iter().any(|c| trimmed.eq_ignore_ascii_case(c)) {
        return LinePlan::Exit;
    }

    match parse(trimmed) {
        Ok(intent) => LinePlan::Run(intent),
        Err(CommandError::InvalidInput) => LinePlan::PromptExpense,
        Err(CommandError::MissingCategory) => LinePlan::PromptCategory,
        Err(e) => LinePlan::Reply(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::replies::UNKNOWN_COMMAND;

    #[test]
    fn test_exit_words() {
        assert_eq!(plan_line("exit"), LinePlan::Exit);
        assert_eq!(plan_line("  QUIT "), LinePlan::Exit);
        // only whole-line matches leave the loop
        assert_ne!(plan_line("exit please"), LinePlan::Exit);
    }

    #[test]
    fn test_bare_commands_prompt_for_arguments() {
        assert_eq!(plan_line("add expense"), LinePlan::PromptExpense);
        assert_eq!(plan_line("Add Expense 12"), LinePlan::PromptExpense);
        assert_eq!(plan_line("check budget"), LinePlan::PromptCategory);
    }

    #[test]
    fn test_single_line_commands_run_directly() {
        assert_eq!(
            plan_line("add expense 9.99 music"),
            LinePlan::Run(Intent::AddExpense {
                amount: 9.99,
                category: "music".to_string(),
            })
        );
        assert_eq!(plan_line("advice"), LinePlan::Run(Intent::Advice));
        assert_eq!(plan_line("hmm"), LinePlan::Run(Intent::Unknown));
    }

    #[test]
    fn test_bad_amount_is_reported() {
        assert_eq!(
            plan_line("add expense ten lunch"),
            LinePlan::Reply("Invalid amount. Please use 'add expense <amount> <category>'.".to_string())
        );
        assert_ne!(plan_line("add expense ten lunch"), LinePlan::Reply(UNKNOWN_COMMAND.to_string()));
    }
}
