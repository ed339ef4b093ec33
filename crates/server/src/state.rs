use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use common::types::ServiceKind;
use configs::Settings;
use service::{connection, errors::ServiceError, provision};

/// Shared per-process state: the resolved settings, a lazily established
/// database connection and the container readiness flag flipped by the
/// first successful health check.
#[derive(Clone)]
pub struct AppState {
    pub kind: ServiceKind,
    pub settings: Arc<Settings>,
    db: Arc<OnceCell<DatabaseConnection>>,
    pub ready: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(kind: ServiceKind, settings: Settings) -> Self {
        Self {
            kind,
            settings: Arc::new(settings),
            db: Arc::new(OnceCell::new()),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Connection for request handlers. Connects on first use and reuses the
    /// connection afterwards.
    pub async fn db(&self) -> Result<&DatabaseConnection, ServiceError> {
        let url = self.settings.database_url();
        self.db
            .get_or_try_init(|| async move { connection::connect(&url).await })
            .await
    }

    /// Connection for the health check. Also creates the service database
    /// itself when the target does not exist yet.
    pub async fn db_or_provision(&self) -> Result<&DatabaseConnection, ServiceError> {
        let url = self.settings.database_url();
        let maintenance_url = self.settings.maintenance_url();
        self.db
            .get_or_try_init(|| async move {
                provision::connect_or_create(&url, &maintenance_url, &self.settings.database_name)
                    .await
            })
            .await
    }
}
