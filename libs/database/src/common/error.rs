/// Errors raised while connecting to, probing or migrating the database
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration failed for {app}: {source}")]
    MigrationFailed {
        app: String,
        #[source]
        source: sea_orm::DbErr,
    },
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
