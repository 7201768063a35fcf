use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dotenvy::dotenv;
use std::env;
use std::io::Write;

use budget_assistant::action_router::{ActionRouterInput, ActionRouterOutput};
use budget_assistant::budgets::processor_enums::{BudgetsProcessorInput, BudgetsProcessorOutput};
use budget_assistant::chat::{execute, Intent};
use budget_assistant::chat::replies::format_amount;
use budget_assistant::cli_helper::{call_action_router, initialize_app_config, plan_line, LinePlan};
use budget_assistant::cli_utils::{
    formatting::print_header,
    format_record, format_table, print_error, print_info, print_success, print_warning, CliError, CliResult, Input,
};
use budget_assistant::expenses::processor_enums::{ExpensesProcessorInput, ExpensesProcessorOutput, GetExpensesFilter};
use budget_assistant::utils::app_config::{AppConfig, StoreArgs};

#[derive(Parser, Debug)]
#[command(
    name = "budget-cli",
    about = "Interactive budget assistant",
    long_about = "Log expenses, check category budgets and get spending advice from the terminal"
)]
struct CliArgs {
    #[command(flatten)]
    store: StoreArgs,

    /// Print all budgets and the most recent expenses, then exit
    #[arg(long)]
    summary: bool,

    /// How many recent expenses the summary lists
    #[arg(long, default_value_t = 10)]
    recent: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn".to_string())
                .as_str(),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    eprint!("Opening budget store... ");
    std::io::stderr().flush().ok();

    let app_config = match initialize_app_config(&args.store) {
        Ok(config) => {
            eprintln!("{}", "✓ Ready".green());
            config
        }
        Err(e) => {
            eprintln!("{}", "✗ Failed".red());
            eprintln!("Error: {}", e);
            return Err(e);
        }
    };

    if args.summary {
        return print_summary(&app_config, args.recent).await;
    }

    run_loop(&app_config).await;

    Ok(())
}

async fn run_loop(app_config: &AppConfig) {
    println!();
    println!("{}", "Welcome to your Budget Management Chatbot!".bold().bright_cyan());
    println!("You can add expenses, check your budget, or get financial advice.");
    println!("Type 'help' to see available commands or 'exit' to quit.");

    loop {
        println!();
        let line = match Input::get_line("What would you like to do?") {
            Ok(line) => line,
            Err(e) => {
                print_error(&e.to_string());
                break;
            }
        };

        let intent = match plan_line(&line) {
            LinePlan::Exit => {
                print_info("Goodbye!");
                break;
            }
            LinePlan::Run(intent) => Ok(intent),
            LinePlan::PromptExpense => prompt_expense(),
            LinePlan::PromptCategory => prompt_category(),
            LinePlan::Reply(message) => {
                print_warning(&message);
                continue;
            }
        };

        match intent {
            Ok(intent) => run_intent(intent, app_config).await,
            Err(CliError::ValidationError(message)) => print_warning(&message),
            Err(e) => {
                print_error(&e.to_string());
                break;
            }
        }
    }
}

fn prompt_expense() -> CliResult<Intent> {
    let amount = Input::get_amount("Enter the amount")?;
    let category = Input::get_string("Enter the category")?;

    Ok(Intent::AddExpense { amount, category })
}

fn prompt_category() -> CliResult<Intent> {
    let category = Input::get_string("Enter the category")?;

    Ok(Intent::CheckBudget { category })
}

async fn run_intent(intent: Intent, app_config: &AppConfig) {
    let is_expense = matches!(intent, Intent::AddExpense { .. });

    match execute(intent, app_config).await {
        Ok(reply) if is_expense => print_success(&reply),
        Ok(reply) => println!("{}", reply),
        Err(e) => print_error(&format!("Storage failure: {}", e)),
    }
}

async fn print_summary(app_config: &AppConfig, recent: i64) -> Result<()> {
    print_header("Budgets");

    let budgets = match call_action_router(
        ActionRouterInput::Budgets(BudgetsProcessorInput::GetBudgets),
        app_config.clone(),
    )
    .await?
    {
        ActionRouterOutput::Budgets(BudgetsProcessorOutput::GetBudgets(rows)) => rows,
        _ => return Err(anyhow::anyhow!("Unexpected output type")),
    };

    if budgets.is_empty() {
        print_info("No budgets yet. Log an expense to create one.");
    } else {
        let rows = budgets
            .iter()
            .map(|b| {
                vec![
                    b.category.clone(),
                    format_amount(b.budget_limit),
                    format_amount(b.spent),
                    format_amount(b.budget_limit - b.spent),
                ]
            })
            .collect();
        format_table(vec!["Category", "Limit", "Spent", "Remaining"], rows);
    }

    println!();
    let total_limit: f64 = budgets.iter().map(|b| b.budget_limit).sum();
    let total_spent: f64 = budgets.iter().map(|b| b.spent).sum();
    format_record(vec![
        ("Categories", budgets.len().to_string()),
        ("Total limit", format_amount(total_limit)),
        ("Total spent", format_amount(total_spent)),
    ]);

    print_header("Recent expenses");

    let expenses = match call_action_router(
        ActionRouterInput::Expenses(ExpensesProcessorInput::GetExpenses(GetExpensesFilter {
            category: None,
            limit: Some(recent),
        })),
        app_config.clone(),
    )
    .await?
    {
        ActionRouterOutput::Expenses(ExpensesProcessorOutput::GetExpenses(rows)) => rows,
        _ => return Err(anyhow::anyhow!("Unexpected output type")),
    };

    if expenses.is_empty() {
        print_info("No expenses recorded.");
        return Ok(());
    }

    let rows = expenses
        .iter()
        .map(|e| {
            vec![
                e.date.format("%Y-%m-%d").to_string(),
                e.category.clone(),
                format_amount(e.amount),
            ]
        })
        .collect();
    format_table(vec!["Date", "Category", "Amount"], rows);

    Ok(())
}
