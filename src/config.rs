//! Process configuration from the environment.
use anyhow::Context;

/// Settings shared by the `serve` and `generate` binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string, `DB_URL`.
    pub db_url: String,
    /// Base URL of the equity solver, `SOLVER_URL`.
    pub solver_url: String,
    /// Listen address of the HTTP server, `BIND_ADDR`.
    pub bind_addr: String,
    /// Connections kept by the server's pool, `DB_POOL_SIZE`.
    pub pool_size: usize,
}

impl Config {
    pub const DEFAULT_SOLVER_URL: &'static str = "http://localhost:8080";
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8888";
    pub const DEFAULT_POOL_SIZE: usize = 16;

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            db_url: get("DB_URL").context("DB_URL must be set")?,
            solver_url: get("SOLVER_URL").unwrap_or_else(|| Self::DEFAULT_SOLVER_URL.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| Self::DEFAULT_BIND_ADDR.to_string()),
            pool_size: match get("DB_POOL_SIZE") {
                None => Self::DEFAULT_POOL_SIZE,
                Some(size) => size
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .with_context(|| format!("DB_POOL_SIZE must be a positive integer, got {:?}", size))?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("DB_URL"));
        assert!(config(&[("DB_URL", "  ")]).is_err());
    }

    #[test]
    fn defaults_fill_the_rest() {
        let config = config(&[("DB_URL", "postgres://localhost/scenarios")]).unwrap();
        assert_eq!(config.db_url, "postgres://localhost/scenarios");
        assert_eq!(config.solver_url, Config::DEFAULT_SOLVER_URL);
        assert_eq!(config.bind_addr, Config::DEFAULT_BIND_ADDR);
        assert_eq!(config.pool_size, Config::DEFAULT_POOL_SIZE);
    }

    #[test]
    fn overrides_are_read() {
        let config = config(&[
            ("DB_URL", "postgres://db/scenarios"),
            ("SOLVER_URL", "http://solver:9000"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("DB_POOL_SIZE", "4"),
        ])
        .unwrap();
        assert_eq!(config.solver_url, "http://solver:9000");
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn pool_size_must_be_positive() {
        assert!(config(&[("DB_URL", "x"), ("DB_POOL_SIZE", "0")]).is_err());
        assert!(config(&[("DB_URL", "x"), ("DB_POOL_SIZE", "lots")]).is_err());
    }
}
