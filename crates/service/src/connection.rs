use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::errors::ServiceError;

/// Establish a database connection. Callers memoize the result so this runs
/// at most once per process under normal operation.
pub async fn connect(url: &str) -> Result<DatabaseConnection, ServiceError> {
    let db = Database::connect(url).await.map_err(|e| {
        tracing::error!(error = %e, "failed to connect to database");
        ServiceError::Unavailable(format!("cannot connect to database: {e}"))
    })?;
    info!("database connection established");
    Ok(db)
}
