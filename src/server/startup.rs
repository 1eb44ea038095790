use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::server::{
    config::{Config, DatabaseKind},
    data::course::{sql::SqlCourseStore, CourseStore},
    error::AppError,
};

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info` for the application with
/// request tracing from `tower_http` at `debug`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courses=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connects the course store selected by the database URL.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Arc<dyn CourseStore>)` - Connected store ready for requests
/// - `Err(AppError::ConfigErr)` - Unsupported URL scheme or document store not compiled in
/// - `Err(AppError)` - Failed to connect or prepare the schema
pub async fn connect_to_store(config: &Config) -> Result<Arc<dyn CourseStore>, AppError> {
    match config.database_kind()? {
        DatabaseKind::Sql => {
            let db = connect_to_database(config).await?;
            Ok(Arc::new(SqlCourseStore::new(db)))
        }
        DatabaseKind::Document => connect_to_document_store(config).await,
    }
}

/// Connects to the SQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations to ensure the course table exists.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

#[cfg(feature = "mongo")]
async fn connect_to_document_store(config: &Config) -> Result<Arc<dyn CourseStore>, AppError> {
    use crate::server::data::course::mongo::MongoCourseStore;

    let store = MongoCourseStore::connect(
        &config.database_url,
        &config.database_name,
        &config.course_collection,
    )
    .await?;

    Ok(Arc::new(store))
}

#[cfg(not(feature = "mongo"))]
async fn connect_to_document_store(_config: &Config) -> Result<Arc<dyn CourseStore>, AppError> {
    Err(crate::server::error::config::ConfigError::DocumentStoreDisabled.into())
}

/// Resolves once the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
