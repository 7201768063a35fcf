use crate::budgets::config::DEFAULT_BUDGET_LIMIT;

#[derive(Clone, Debug)]
pub struct ExpensesConfig {
    pub default_budget_limit: f64,
}

impl Default for ExpensesConfig {
    fn default() -> Self {
        Self {
            default_budget_limit: DEFAULT_BUDGET_LIMIT,
        }
    }
}
