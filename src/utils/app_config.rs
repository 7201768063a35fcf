use anyhow::Result;
use clap::Args;

use crate::utils::db::{build_pool, DbPool};

pub const DEFAULT_DATABASE_URL: &str = "budget.db";

/// Storage flags shared by every binary.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path of the SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pool: DbPool,
}

impl AppConfig {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn from_args(args: &StoreArgs) -> Result<Self> {
        Self::from_database_url(&args.database_url)
    }

    pub fn from_database_url(database_url: &str) -> Result<Self> {
        let pool = build_pool(database_url)?;
        tracing::info!(database_url, "budget store ready");

        Ok(Self::new(pool))
    }
}
