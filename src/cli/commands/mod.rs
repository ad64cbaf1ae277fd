pub mod content;
pub mod migrate;
pub mod serve;

/// Open the database the configuration selects and bind it to `$db` for
/// `$body`. Each arm is monomorphised separately, so `$body` can call code
/// that is generic over `D: Database`.
macro_rules! with_database {
    ($config:expr, $db:ident => $body:expr) => {
        match $config.backend() {
            $crate::db::Backend::Sqlite => {
                let url = $config.url.clone().unwrap_or_default();
                let $db = $crate::db::SqliteDatabase::open(&url).await?;
                $body
            }
            $crate::db::Backend::Postgres => {
                let $db = $crate::db::PostgresDatabase::connect(&$config).await?;
                $body
            }
        }
    };
}
pub(crate) use with_database;


#[cfg(test)]
mod migrate_test;
