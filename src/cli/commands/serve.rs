//! Serve command - composition root for the MCP server

use tracing::info;

use super::with_database;
use crate::api::{self, Config};
use crate::cli::error::CliResult;
use crate::db::{Database, DbConfig};

/// Open and migrate the database, then hand it to the chosen transport.
pub async fn run(config: Config, db_config: DbConfig, stdio: bool) -> CliResult<()> {
    api::init_tracing(config.verbosity);

    // stdout belongs to the protocol in stdio mode
    if !stdio {
        println!();
        println!("🚀 mcp-docs server starting...");
        println!("   MCP:      http://{}:{}/mcp", config.host, config.port);
        println!("   Health:   http://{}:{}/health", config.host, config.port);
        println!("   Docs:     {}", config.docs_dir.display());
        println!("   Readme:   {}", config.readme_path.display());
        println!("   Database: {}", db_config.display_target());
        println!();
    }

    with_database!(db_config, db => serve(config, db, stdio).await)
}

async fn serve<D: Database + 'static>(config: Config, db: D, stdio: bool) -> CliResult<()> {
    // Run migrations before starting the server
    db.migrate().await?;
    info!("Database migrations complete");

    if stdio {
        api::run_stdio(config, db).await?;
    } else {
        api::run(config, db).await?;
    }
    Ok(())
}
