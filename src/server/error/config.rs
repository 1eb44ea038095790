use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `DATABASE_URL` uses a scheme no store backend understands.
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedDatabase(String),

    /// `DATABASE_URL` points at a document store but the binary was built without
    /// the `mongo` feature.
    #[error("Document store support is not enabled, rebuild with the `mongo` feature")]
    DocumentStoreDisabled,
}
