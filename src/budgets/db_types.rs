use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::budgets as BudgetsTable;

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = BudgetsTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetRecord {
    pub id: i32,
    pub category: String,
    pub budget_limit: f64,
    pub spent: f64,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = BudgetsTable)]
pub struct CreateBudget {
    pub category: String,
    pub budget_limit: f64,
    pub spent: f64,
}
