//! Shared setup for tests that need a live Postgres instance.
//!
//! Tests call `get_db` and skip themselves when no database is reachable or
//! `SKIP_DB_TESTS` is set, so the unit suite stays green on machines without
//! a local Postgres.

use anyhow::{bail, Context, Result};
use sea_orm::DatabaseConnection;

use common::types::ServiceKind;
use configs::Settings;

use crate::provision;

/// Connect to an isolated per-service test database, provisioning it on
/// first use.
pub async fn get_db(kind: ServiceKind) -> Result<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        bail!("SKIP_DB_TESTS is set");
    }

    let settings = Settings::from_lookup(kind, |name| match name {
        // keep test data out of the real service databases
        "DATABASE_NAME" => Some(format!("{}_test", kind.default_database())),
        "DATABASE_KEY" => std::env::var(name).ok().or_else(|| Some("dev123".to_string())),
        _ => std::env::var(name).ok(),
    })?;

    let db = provision::connect_or_create(
        &settings.database_url(),
        &settings.maintenance_url(),
        &settings.database_name,
    )
    .await
    .context("no test database reachable")?;
    provision::ensure_ready(kind, &db, &settings.container_name)
        .await
        .context("provisioning the test database failed")?;
    Ok(db)
}
