use anyhow::Result;
use chrono::{Local, NaiveDate};
use diesel::prelude::*;

use crate::budgets::db_types::BudgetRecord;
use crate::budgets::operations::apply_to_budget;
use crate::expenses::db_types::{CreateExpense, ExpenseRecord};
use crate::schema::expenses as ExpensesTable;
use crate::utils::db::DbConn;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Stores the expense and rolls it into its category budget in one write
/// transaction.
pub fn log_expense(
    conn: DbConn,
    amount: f64,
    category: &str,
    date: NaiveDate,
    default_limit: f64,
) -> Result<(ExpenseRecord, BudgetRecord)> {
    conn.immediate_transaction::<_, anyhow::Error, _>(|conn| {
        let expense = diesel::insert_into(ExpensesTable::table)
            .values(&CreateExpense {
                amount,
                category: category.to_string(),
                date,
            })
            .returning(ExpenseRecord::as_returning())
            .get_result::<ExpenseRecord>(conn)?;

        let budget = apply_to_budget(conn, category, amount, default_limit)?;

        Ok((expense, budget))
    })
}

/// Newest first. `limit` caps the number of rows returned.
pub fn list_expenses(
    conn: DbConn,
    category_filter: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<ExpenseRecord>> {
    use crate::schema::expenses::dsl::*;

    let mut query = expenses.select(ExpenseRecord::as_select()).into_boxed();
    if let Some(category_value) = category_filter {
        query = query.filter(category.eq(category_value.to_string()));
    }
    if let Some(limit_value) = limit {
        query = query.limit(limit_value);
    }

    let res = query
        .order((date.desc(), id.desc()))
        .load::<ExpenseRecord>(conn)?;

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budgets::config::DEFAULT_BUDGET_LIMIT;
    use crate::budgets::operations::get_budget;
    use crate::utils::app_config::test_support::temp_app_config;
    use crate::utils::db::get_conn;

    #[test]
    fn test_log_expense_records_row_and_budget() -> Result<()> {
        let (_dir, config) = temp_app_config();
        let mut conn = get_conn(config.pool.clone())?;

        let (expense, budget) = log_expense(&mut conn, 42.5, "groceries and snacks", today(), DEFAULT_BUDGET_LIMIT)?;
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.category, "groceries and snacks");
        assert_eq!(expense.date, today());
        assert_eq!(budget.spent, 42.5);
        assert_eq!(budget.budget_limit, DEFAULT_BUDGET_LIMIT);
        Ok(())
    }

    #[test]
    fn test_repeated_expenses_accumulate() -> Result<()> {
        let (_dir, config) = temp_app_config();
        let mut conn = get_conn(config.pool.clone())?;

        for _ in 0..3 {
            log_expense(&mut conn, 10.0, "coffee", today(), DEFAULT_BUDGET_LIMIT)?;
        }

        let budget = get_budget(&mut conn, "coffee")?.expect("budget should exist");
        assert_eq!(budget.spent, 30.0);
        assert_eq!(list_expenses(&mut conn, Some("coffee"), None)?.len(), 3);
        Ok(())
    }

    #[test]
    fn test_zero_and_negative_amounts_are_accepted() -> Result<()> {
        let (_dir, config) = temp_app_config();
        let mut conn = get_conn(config.pool.clone())?;

        log_expense(&mut conn, 0.0, "refunds", today(), DEFAULT_BUDGET_LIMIT)?;
        let (_, budget) = log_expense(&mut conn, -20.0, "refunds", today(), DEFAULT_BUDGET_LIMIT)?;
        assert_eq!(budget.spent, -20.0);
        Ok(())
    }

    #[test]
    fn test_list_expenses_filters_and_orders() -> Result<()> {
        let (_dir, config) = temp_app_config();
        let mut conn = get_conn(config.pool.clone())?;

        let earlier = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        log_expense(&mut conn, 1.0, "food", earlier, DEFAULT_BUDGET_LIMIT)?;
        log_expense(&mut conn, 2.0, "rent", today(), DEFAULT_BUDGET_LIMIT)?;
        log_expense(&mut conn, 3.0, "food", today(), DEFAULT_BUDGET_LIMIT)?;

        let all = list_expenses(&mut conn, None, None)?;
        assert_eq!(all.iter().map(|e| e.amount).collect::<Vec<_>>(), vec![3.0, 2.0, 1.0]);

        let food = list_expenses(&mut conn, Some("food"), Some(1))?;
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].amount, 3.0);
        Ok(())
    }
}
