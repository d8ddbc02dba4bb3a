use std::str::FromStr;

pub struct StoreConfig {
    pub url: String,
    pub pool_size: usize,
}

impl StoreConfig {
    /// Resolve the database url: CLI argument, then `DATABASE_URL`, then a
    /// YAML-provided value, then an in-memory database.
    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            "sqlite::memory:".to_string()
        };

        Self { url, pool_size: 5 }
    }

    pub async fn create_pool(&self) -> Result<sqlx::SqlitePool, sqlx::Error> {
        let options = sqlx::sqlite::SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true);
        sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(self.pool_size as u32)
            .connect_with(options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let config = StoreConfig::from_cli_or_env_or_yaml(
            Some("sqlite://cli.db".to_string()),
            Some("sqlite://yaml.db".to_string()),
        );
        assert_eq!(config.url, "sqlite://cli.db");
    }

    #[test]
    fn defaults_to_in_memory() {
        let config = StoreConfig::from_cli_or_env_or_yaml(None, None);
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(config.url, "sqlite::memory:");
        }
    }
}
