/// Limit given to a category the first time money is spent on it.
pub const DEFAULT_BUDGET_LIMIT: f64 = 500.0;

/// Spending below this share of the limit earns a "doing great" tip.
pub const DOING_GREAT_RATIO: f64 = 0.5;

#[derive(Clone, Debug)]
pub struct BudgetsConfig {
    pub default_limit: f64,
    pub doing_great_ratio: f64,
}

impl Default for BudgetsConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_BUDGET_LIMIT,
            doing_great_ratio: DOING_GREAT_RATIO,
        }
    }
}
