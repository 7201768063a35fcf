use anyhow::{anyhow, Result};

use crate::action_router::{ActionRouterInput, ActionRouterOutput};
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::chat::intent::{parse, Intent};
use crate::chat::replies;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput, LogExpenseInputArgs};
use crate::utils::app_config::AppConfig;

/// Parses and runs one message. Parse failures come back as reply text;
/// only storage failures are returned as errors.
pub async fn respond(message: &str, app_config: &AppConfig) -> Result<String> {
    match parse(message) {
        Ok(intent) => execute(intent, app_config).await,
        Err(e) => Ok(e.to_string()),
    }
}

pub async fn execute(intent: Intent, app_config: &AppConfig) -> Result<String> {
    match intent {
        Intent::AddExpense { amount, category } => {
            let request = ActionRouterInput::Expenses(ExpensesProcessorInput::LogExpense(
                LogExpenseInputArgs { amount, category },
            ));

            match request.process(app_config.clone()).await? {
                ActionRouterOutput::Expenses(ExpensesProcessorOutput::LogExpense(output)) => {
                    Ok(replies::expense_added(output.expense.amount, &output.expense.category))
                }
                _ => Err(anyhow!("Unexpected output type")),
            }
        }
        Intent::CheckBudget { category } => {
            let request = ActionRouterInput::Budgets(BudgetsProcessorInput::CheckBudget(category.clone()));

            match request.process(app_config.clone()).await? {
                ActionRouterOutput::Budgets(BudgetsProcessorOutput::CheckBudget(Some(status))) => {
                    Ok(replies::budget_status(&status))
                }
                ActionRouterOutput::Budgets(BudgetsProcessorOutput::CheckBudget(None)) => {
                    Ok(replies::budget_not_found(&category))
                }
                _ => Err(anyhow!("Unexpected output type")),
            }
        }
        Intent::Advice => {
            let request = ActionRouterInput::Budgets(BudgetsProcessorInput::GetAdvice);

            match request.process(app_config.clone()).await? {
                ActionRouterOutput::Budgets(BudgetsProcessorOutput::GetAdvice(advice)) => Ok(advice.render()),
                _ => Err(anyhow!("Unexpected output type")),
            }
        }
        Intent::Help => Ok(replies::HELP_TEXT.to_string()),
        Intent::Unknown => Ok(replies::UNKNOWN_COMMAND.to_string()),
    }
}
