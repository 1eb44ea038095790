use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_NAME: &str = "coursesDb";
const DEFAULT_COURSE_COLLECTION: &str = "courses";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Store backend selected by the scheme of `DATABASE_URL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseKind {
    /// Relational database reached through SeaORM (`sqlite:`, `postgres:`).
    Sql,
    /// MongoDB document store (`mongodb:`, `mongodb+srv:`).
    Document,
}

pub struct Config {
    pub database_url: String,

    /// Database holding the course collection. Document store only.
    #[cfg_attr(not(feature = "mongo"), allow(dead_code))]
    pub database_name: String,
    /// Collection holding course documents. Document store only.
    #[cfg_attr(not(feature = "mongo"), allow(dead_code))]
    pub course_collection: String,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            course_collection: lookup("COURSE_COLLECTION")
                .unwrap_or_else(|| DEFAULT_COURSE_COLLECTION.to_string()),
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }

    /// Determines which store backend the database URL refers to.
    pub fn database_kind(&self) -> Result<DatabaseKind, ConfigError> {
        let scheme = self
            .database_url
            .split_once(':')
            .map(|(scheme, _)| scheme)
            .unwrap_or_default();

        match scheme {
            "sqlite" | "postgres" | "postgresql" => Ok(DatabaseKind::Sql),
            "mongodb" | "mongodb+srv" => Ok(DatabaseKind::Document),
            other => Err(ConfigError::UnsupportedDatabase(other.to_string())),
        }
    }
}
