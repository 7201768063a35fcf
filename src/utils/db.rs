use anyhow::Result;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// Pooled connections deref into this, so `&mut pooled` coerces.
pub type DbConn<'db> = &'db mut SqliteConnection;

const CREATE_EXPENSES_TABLE: &str = r"
create table if not exists expenses (
    id integer primary key autoincrement,
    amount real not null,
    category text not null,
    date text not null default (date('now'))
);
";

const CREATE_BUDGETS_TABLE: &str = r"
create table if not exists budgets (
    id integer primary key autoincrement,
    category text not null,
    budget_limit real not null,
    spent real not null default 0
);
create unique index if not exists budgets_category_idx on budgets (category);
";

/// Applied to every connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout_ms: u32,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
        }
    }
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            self.busy_timeout_ms
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn build_pool(database_url: &str) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)?;

    let mut conn = get_conn(pool.clone())?;
    initialize_schema(&mut conn)?;

    Ok(pool)
}

pub fn get_conn(pool: DbPool) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    let conn = pool.get()?;

    Ok(conn)
}

/// Creates both tables if they are missing. Safe to run on every start.
pub fn initialize_schema(conn: DbConn) -> Result<()> {
    conn.batch_execute(CREATE_EXPENSES_TABLE)?;
    conn.batch_execute(CREATE_BUDGETS_TABLE)?;
    Ok(())
}
