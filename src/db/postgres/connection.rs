//! PostgreSQL connection pool and migration management.

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use super::content::PostgresContentRepository;
use crate::db::{Database, DbConfig, DbError, DbResult};

// Embed migrations from data/sql/postgres/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("data/sql/postgres");

/// PostgreSQL database implementation.
pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    /// Connect using `DATABASE_URL` if configured, otherwise the individual
    /// host/port/credential fields.
    pub async fn connect(config: &DbConfig) -> DbResult<Self> {
        let options = match &config.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?,
            None => PgConnectOptions::new()
                .host(&config.host)
                .port(config.port)
                .username(&config.username)
                .password(&config.password)
                .database(&config.database),
        };

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }
}

impl Database for PostgresDatabase {
    type Contents<'a> = PostgresContentRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    fn contents(&self) -> Self::Contents<'_> {
        PostgresContentRepository { pool: &self.pool }
    }
}
