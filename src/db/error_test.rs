//! Tests for database error types.

use crate::db::DbError;

#[test]
fn not_found_error_carries_id() {
    let err = DbError::NotFound {
        entity_type: "Content".to_string(),
        id: "9999".to_string(),
    };
    assert_eq!(err.to_string(), "Content with ID 9999 not found");
}

#[test]
fn validation_error_displays_correctly() {
    let err = DbError::Validation {
        message: "title cannot be empty".to_string(),
    };
    assert_eq!(err.to_string(), "Validation error: title cannot be empty");
}

#[test]
fn migration_error_displays_correctly() {
    let err = DbError::Migration {
        message: "failed to apply migration 0001".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Migration error: failed to apply migration 0001"
    );
}

#[test]
fn sqlx_errors_become_database_errors() {
    let err: DbError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, DbError::Database { .. }));
}
