use serde::{Deserialize, Serialize};
use crate::budgets::db_types::BudgetRecord;
use crate::budgets::models::{Advice, BudgetStatus};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApplyExpenseInputArgs {
    pub category: String,
    pub amount: f64
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum BudgetsProcessorInput {
    ApplyExpense(ApplyExpenseInputArgs),
    CheckBudget(String),
    GetBudgets,
    GetAdvice
}

#[derive(Deserialize, Serialize, Debug)]
pub enum BudgetsProcessorOutput {
    ApplyExpense(BudgetRecord),
    CheckBudget(Option<BudgetStatus>),
    GetBudgets(Vec<BudgetRecord>),
    GetAdvice(Advice)
}
