use serde::{Deserialize, Serialize};
use std::fmt;

use super::db_types::BudgetRecord;

pub const ALL_GOOD_ADVICE: &str = "Your finances look good overall!";

/// Snapshot of one category's budget. `remaining` goes negative once overspent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: String,
    pub budget_limit: f64,
    pub spent: f64,
    pub remaining: f64,
}

impl From<&BudgetRecord> for BudgetStatus {
    fn from(record: &BudgetRecord) -> Self {
        Self {
            category: record.category.clone(),
            budget_limit: record.budget_limit,
            spent: record.spent,
            remaining: record.budget_limit - record.spent,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum AdviceTip {
    Overspending(String),
    DoingGreat(String),
}

impl AdviceTip {
    /// `None` when spending sits between the "doing great" threshold and the limit.
    pub fn for_budget(record: &BudgetRecord, doing_great_ratio: f64) -> Option<Self> {
        if record.spent > record.budget_limit {
            Some(AdviceTip::Overspending(record.category.clone()))
        } else if record.spent < record.budget_limit * doing_great_ratio {
            Some(AdviceTip::DoingGreat(record.category.clone()))
        } else {
            None
        }
    }
}

impl fmt::Display for AdviceTip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdviceTip::Overspending(category) => {
                write!(f, "You're overspending on {}. Consider cutting down.", category)
            }
            AdviceTip::DoingGreat(category) => {
                write!(f, "You're doing great with {}. Keep it up!", category)
            }
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Advice {
    pub tips: Vec<AdviceTip>,
}

impl Advice {
    /// Tips follow the order of `budgets`.
    pub fn from_budgets(budgets: &[BudgetRecord], doing_great_ratio: f64) -> Self {
        let tips = budgets
            .iter()
            .filter_map(|b| AdviceTip::for_budget(b, doing_great_ratio))
            .collect();

        Self { tips }
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return ALL_GOOD_ADVICE.to_string();
        }

        self.tips
            .iter()
            .map(|tip| tip.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
