use anyhow::Result;

use crate::utils::app_config::AppConfig;
use crate::utils::db::DbConn;

pub trait ActionProcessor<Config, Output> {
    fn process(&self, app_config: &AppConfig, local_config: &mut Config, conn: DbConn) -> Result<Output>;
}
