//! Shared helpers for integration tests that need PostgreSQL.
//!
//! Tests read the connection string from `USERS_TEST_DATABASE_URL`. When it is
//! unset they print a skip marker and return early so local runs without a
//! database stay green; CI sets the variable.

use std::sync::OnceLock;

use user_directory::outbound::persistence::run_pending_migrations;

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_VAR: &str = "USERS_TEST_DATABASE_URL";

static MIGRATED: OnceLock<Result<(), String>> = OnceLock::new();

/// Return the test database URL with migrations applied, or `None` after
/// printing a skip marker when no database is configured.
///
/// # Panics
/// Panics when the database is configured but migrations fail, so CI
/// breakage is not masked.
pub fn migrated_test_database() -> Option<String> {
    let Some(url) = std::env::var(TEST_DATABASE_URL_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
    else {
        eprintln!("SKIP-TEST-DB: {TEST_DATABASE_URL_VAR} is not set");
        return None;
    };

    let outcome = MIGRATED.get_or_init(|| {
        run_pending_migrations(&url)
            .map(|_| ())
            .map_err(|err| err.to_string())
    });
    if let Err(reason) = outcome {
        panic!("test database migrations failed: {reason}");
    }
    Some(url)
}

/// Email address that no other test run will use.
pub fn unique_email(label: &str) -> String {
    format!("{label}-{}@example.test", uuid::Uuid::new_v4().simple())
}
