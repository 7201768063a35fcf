// Public library interface for budget-assistant
pub mod action_router;
pub mod api;
pub mod budgets;
pub mod chat;
pub mod cli_helper;
pub mod cli_utils;
pub mod expenses;
pub mod schema;
pub mod utils;
