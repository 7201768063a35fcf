use anyhow::Result;
use serde::{Deserialize, Serialize};
use crate::budgets::config::BudgetsConfig;
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::expenses::config::ExpensesConfig;
use crate::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::get_conn;
use crate::utils::traits::ActionProcessor;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ActionRouterInput {
    Expenses(ExpensesProcessorInput),
    Budgets(BudgetsProcessorInput)
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ActionRouterOutput {
    Expenses(ExpensesProcessorOutput),
    Budgets(BudgetsProcessorOutput)
}


impl ActionRouterInput {

    /// Runs the action on the blocking pool; diesel calls are synchronous.
    pub async fn process(self, app_config: AppConfig) -> Result<ActionRouterOutput> {
        tokio::task::spawn_blocking(move || self.process_blocking(&app_config)).await?
    }

    pub fn process_blocking(&self, app_config: &AppConfig) -> Result<ActionRouterOutput> {
        // one pooled connection per action, returned to the pool on drop
        let mut conn = get_conn(app_config.pool.clone())?;

        match self {
            ActionRouterInput::Expenses(processor) => {
                let mut config = ExpensesConfig::default();

                let res = processor.process(app_config, &mut config, &mut conn)?;
                Ok(ActionRouterOutput::Expenses(res))
            }
            ActionRouterInput::Budgets(processor) => {
                let mut config = BudgetsConfig::default();

                let res = processor.process(app_config, &mut config, &mut conn)?;
                Ok(ActionRouterOutput::Budgets(res))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::processor_enums::ApplyExpenseInputArgs;
    use crate::expenses::processor_enums::{GetExpensesFilter, LogExpenseInputArgs};
    use crate::utils::app_config::test_support::temp_app_config;

    #[tokio::test]
    async fn test_log_then_check_reflects_new_spend() -> Result<()> {
        let (_dir, config) = temp_app_config();

        let missing = ActionRouterInput::Budgets(BudgetsProcessorInput::CheckBudget("food".to_string()))
            .process(config.clone())
            .await?;
        assert!(matches!(
            missing,
            ActionRouterOutput::Budgets(BudgetsProcessorOutput::CheckBudget(None))
        ));

        ActionRouterInput::Expenses(ExpensesProcessorInput::LogExpense(LogExpenseInputArgs {
            amount: 120.0,
            category: "food".to_string(),
        }))
        .process(config.clone())
        .await?;

        let output = ActionRouterInput::Budgets(BudgetsProcessorInput::CheckBudget("food".to_string()))
            .process(config.clone())
            .await?;

        match output {
            ActionRouterOutput::Budgets(BudgetsProcessorOutput::CheckBudget(Some(status))) => {
                assert_eq!(status.budget_limit, 500.0);
                assert_eq!(status.spent, 120.0);
                assert_eq!(status.remaining, 380.0);
            }
            other => panic!("unexpected output: {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_apply_expense_without_expense_row() -> Result<()> {
        let (_dir, config) = temp_app_config();

        ActionRouterInput::Budgets(BudgetsProcessorInput::ApplyExpense(ApplyExpenseInputArgs {
            category: "gifts".to_string(),
            amount: 15.0,
        }))
        .process(config.clone())
        .await?;

        let output = ActionRouterInput::Expenses(ExpensesProcessorInput::GetExpenses(GetExpensesFilter::default()))
            .process(config.clone())
            .await?;

        match output {
            ActionRouterOutput::Expenses(ExpensesProcessorOutput::GetExpenses(rows)) => assert!(rows.is_empty()),
            other => panic!("unexpected output: {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_advice_across_budgets() -> Result<()> {
        let (_dir, config) = temp_app_config();

        for (category, amount) in [("rent", 600.0), ("books", 20.0), ("food", 300.0)] {
            ActionRouterInput::Expenses(ExpensesProcessorInput::LogExpense(LogExpenseInputArgs {
                amount,
                category: category.to_string(),
            }))
            .process(config.clone())
            .await?;
        }

        let output = ActionRouterInput::Budgets(BudgetsProcessorInput::GetAdvice)
            .process(config.clone())
            .await?;

        match output {
            ActionRouterOutput::Budgets(BudgetsProcessorOutput::GetAdvice(advice)) => {
                assert_eq!(
                    advice.render(),
                    "You're doing great with books. Keep it up!\nYou're overspending on rent. Consider cutting down."
                );
            }
            other => panic!("unexpected output: {:?}", other),
        }
        Ok(())
    }
}
