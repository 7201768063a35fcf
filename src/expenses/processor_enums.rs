use serde::{Deserialize, Serialize};
use crate::budgets::db_types::BudgetRecord;
use crate::expenses::db_types::ExpenseRecord;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogExpenseInputArgs {
    pub amount: f64,
    pub category: String
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GetExpensesFilter {
    pub category: Option<String>,
    pub limit: Option<i64>
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum ExpensesProcessorInput {
    LogExpense(LogExpenseInputArgs),
    GetExpenses(GetExpensesFilter)
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LogExpenseOutputArgs {
    pub expense: ExpenseRecord,
    pub budget: BudgetRecord
}

#[derive(Deserialize, Serialize, Debug)]
pub enum ExpensesProcessorOutput {
    LogExpense(LogExpenseOutputArgs),
    GetExpenses(Vec<ExpenseRecord>)
}
