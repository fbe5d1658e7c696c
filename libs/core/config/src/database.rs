use crate::{env_or_default, env_parse_or, env_required, ConfigError, FromEnv};

/// Which `UserRepository` implementation the API wires in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreKind::Postgres),
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            other => Err(format!("unknown store '{}', expected 'postgres' or 'memory'", other)),
        }
    }
}

/// Database configuration
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

impl FromEnv for DatabaseConfig {
    /// DATABASE_URL is required; pool sizes default to 10/1
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", 1)?,
        })
    }
}

impl FromEnv for StoreKind {
    fn from_env() -> Result<Self, ConfigError> {
        env_or_default("USER_STORE", "postgres")
            .parse()
            .map_err(|details| ConfigError::ParseError {
                key: "USER_STORE".to_string(),
                details,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_from_env_success() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/accounts")),
                ("DB_MAX_CONNECTIONS", Some("25")),
                ("DB_MIN_CONNECTIONS", None),
            ],
            || {
                let config = DatabaseConfig::from_env().unwrap();
                assert_eq!(config.url, "postgres://localhost/accounts");
                assert_eq!(config.max_connections, 25);
                assert_eq!(config.min_connections, 1);
            },
        );
    }

    #[test]
    fn test_database_config_from_env_missing() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = DatabaseConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_store_kind_defaults_to_postgres() {
        temp_env::with_var_unset("USER_STORE", || {
            assert_eq!(StoreKind::from_env().unwrap(), StoreKind::Postgres);
        });
    }

    #[test]
    fn test_store_kind_memory_and_unknown() {
        temp_env::with_var("USER_STORE", Some("Memory"), || {
            assert_eq!(StoreKind::from_env().unwrap(), StoreKind::Memory);
        });
        temp_env::with_var("USER_STORE", Some("mongo"), || {
            assert!(StoreKind::from_env().is_err());
        });
    }
}
