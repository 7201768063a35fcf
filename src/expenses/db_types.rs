use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use crate::schema::expenses as ExpensesTable;

#[derive(Serialize, Deserialize, Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = ExpensesTable)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ExpenseRecord {
    pub id: i32,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Insertable, Debug, Clone)]
#[diesel(table_name = ExpensesTable)]
pub struct CreateExpense {
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}
