//! Migrate command - applies versioned schema migrations

use tracing::info;

use super::with_database;
use crate::cli::error::CliResult;
use crate::db::{Database, DbConfig};

pub async fn run(db_config: &DbConfig) -> CliResult<String> {
    with_database!(db_config, db => apply(&db).await)?;
    Ok(format!(
        "Migrations applied to {}",
        db_config.display_target()
    ))
}

pub async fn apply<D: Database>(db: &D) -> CliResult<()> {
    db.migrate().await?;
    info!("Database migrations complete");
    Ok(())
}
