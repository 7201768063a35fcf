use crate::budgets::config::BudgetsConfig;
use crate::budgets::models::Advice;
use crate::budgets::operations::{apply_to_budget, budget_status, list_budgets};
use crate::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use crate::utils::app_config::AppConfig;
use crate::utils::db::DbConn;
use crate::utils::traits::ActionProcessor;

impl ActionProcessor<BudgetsConfig, BudgetsProcessorOutput> for BudgetsProcessorInput {
    fn process(&self, _app_config: &AppConfig, local_config: &mut BudgetsConfig, conn: DbConn) -> anyhow::Result<BudgetsProcessorOutput> {
        match self {
            BudgetsProcessorInput::ApplyExpense(args) => {
                let res = apply_to_budget(conn, &args.category, args.amount, local_config.default_limit)?;
                tracing::debug!(category = %res.category, spent = res.spent, "budget updated");

                Ok(BudgetsProcessorOutput::ApplyExpense(res))
            }
            BudgetsProcessorInput::CheckBudget(category) => {
                let res = budget_status(conn, category)?;

                Ok(BudgetsProcessorOutput::CheckBudget(res))
            }
            BudgetsProcessorInput::GetBudgets => {
                let res = list_budgets(conn)?;

                Ok(BudgetsProcessorOutput::GetBudgets(res))
            }
            BudgetsProcessorInput::GetAdvice => {
                let all_budgets = list_budgets(conn)?;
                let advice = Advice::from_budgets(&all_budgets, local_config.doing_great_ratio);

                Ok(BudgetsProcessorOutput::GetAdvice(advice))
            }
        }
    }
}
