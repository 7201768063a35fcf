use anyhow::Result;
use diesel::prelude::*;
use diesel::upsert::excluded;

use crate::budgets::db_types::{BudgetRecord, CreateBudget};
use crate::budgets::models::BudgetStatus;
use crate::schema::budgets as BudgetsTable;
use crate::utils::db::DbConn;

/// Adds `amount` to the category's running total, creating the budget with
/// `default_limit` when the category is new. One statement, so concurrent
/// callers cannot lose an update.
pub fn apply_to_budget(
    conn: DbConn,
    category_value: &str,
    amount: f64,
    default_limit: f64,
) -> Result<BudgetRecord> {
    use crate::schema::budgets::dsl::*;

    let res = diesel::insert_into(BudgetsTable::table)
        .values(&CreateBudget {
            category: category_value.to_string(),
            budget_limit: default_limit,
            spent: amount,
        })
        .on_conflict(category)
        .do_update()
        .set(spent.eq(spent + excluded(spent)))
        .returning(BudgetRecord::as_returning())
        .get_result::<BudgetRecord>(conn)?;

    Ok(res)
}

pub fn get_budget(conn: DbConn, category_value: &str) -> Result<Option<BudgetRecord>> {
    use crate::schema::budgets::dsl::*;

    let res = budgets
        .filter(category.eq(category_value))
        .select(BudgetRecord::as_select())
        .first::<BudgetRecord>(conn)
        .optional()?;

    Ok(res)
}

/// All budgets ordered by category name.
pub fn list_budgets(conn: DbConn) -> Result<Vec<BudgetRecord>> {
    use crate::schema::budgets::dsl::*;

    let res = budgets
        .order(category.asc())
        .select(BudgetRecord::as_select())
        .load::<BudgetRecord>(conn)?;

    Ok(res)
}

pub fn budget_status(conn: DbConn, category_value: &str) -> Result<Option<BudgetStatus>> {
    Ok(get_budget(conn, category_value)?.as_ref().map(BudgetStatus::from))
}
