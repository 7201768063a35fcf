use clap::Parser;

use crate::utils::app_config::StoreArgs;

#[derive(Parser, Clone, Debug)]
#[command(name = "budget-assistant", about = "HTTP front end for the budget assistant")]
pub struct ApiConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl ApiConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ApiConfig::parse_from([
            "budget-assistant",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--database-url",
            "/tmp/other.db",
        ]);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.store.database_url, "/tmp/other.db");
    }
}
