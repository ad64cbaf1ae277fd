//! Tests for database configuration.

use std::env;

use serial_test::serial;

use crate::db::{Backend, DbConfig};

const VARS: [&str; 6] = [
    "DB_HOST",
    "DB_PORT",
    "DB_USERNAME",
    "DB_PASSWORD",
    "DB_NAME",
    "DATABASE_URL",
];

fn clear_env() {
    for var in VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn defaults_when_env_unset() {
    clear_env();

    let config = DbConfig::new();

    assert_eq!(config, DbConfig::default());
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 5432);
    assert_eq!(config.backend(), Backend::Postgres);
}

#[test]
#[serial]
fn reads_each_variable() {
    clear_env();
    unsafe {
        env::set_var("DB_HOST", "db.internal");
        env::set_var("DB_PORT", "6543");
        env::set_var("DB_USERNAME", "reader");
        env::set_var("DB_PASSWORD", "hunter2");
        env::set_var("DB_NAME", "content");
    }

    let config = DbConfig::new();
    clear_env();

    assert_eq!(config.host, "db.internal");
    assert_eq!(config.port, 6543);
    assert_eq!(config.username, "reader");
    assert_eq!(config.password, "hunter2");
    assert_eq!(config.database, "content");
    assert!(!config.display_target().contains("hunter2"));
}

#[test]
#[serial]
fn bad_port_falls_back_to_default() {
    clear_env();
    unsafe {
        env::set_var("DB_PORT", "not-a-port");
    }

    let config = DbConfig::new();
    clear_env();

    assert_eq!(config.port, 5432);
}

#[test]
#[serial]
fn sqlite_url_selects_sqlite_backend() {
    clear_env();
    unsafe {
        env::set_var("DATABASE_URL", "sqlite://content.db");
    }

    let config = DbConfig::new();
    clear_env();

    assert_eq!(config.backend(), Backend::Sqlite);
    assert_eq!(config.display_target(), "sqlite://content.db");
}

#[test]
fn builder_url_overrides_fields() {
    let config = DbConfig::default().with_url("sqlite::memory:");

    assert_eq!(config.backend(), Backend::Sqlite);
}
