use crate::expenses::config::ExpensesConfig;
use crate::expenses::operations::{list_expenses, log_expense, today};
use crate::expenses::processor_enums::*;
use crate::utils::app_config::AppConfig;
use crate::utils::db::DbConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<ExpensesConfig, ExpensesProcessorOutput> for ExpensesProcessorInput {
    fn process(&self, _app_config: &AppConfig, local_config: &mut ExpensesConfig, conn: DbConn) -> anyhow::Result<ExpensesProcessorOutput> {
        match self {
            ExpensesProcessorInput::LogExpense(args) => {
                let (expense, budget) = log_expense(
                    conn,
                    args.amount,
                    &args.category,
                    today(),
                    local_config.default_budget_limit,
                )?;

                tracing::info!(
                    expense_id = expense.id,
                    amount = expense.amount,
                    category = %expense.category,
                    spent = budget.spent,
                    "expense logged"
                );

                Ok(ExpensesProcessorOutput::LogExpense(LogExpenseOutputArgs { expense, budget }))
            }
            ExpensesProcessorInput::GetExpenses(filter) => {
                let res = list_expenses(conn, filter.category.as_deref(), filter.limit)?;

                Ok(ExpensesProcessorOutput::GetExpenses(res))
            }
        }
    }
}
