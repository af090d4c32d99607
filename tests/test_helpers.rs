// ==========================================
// Test helpers
// ==========================================
// Temporary databases with the registration-side schema
// ==========================================

#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::error::Error;
use tempfile::NamedTempFile;

/// Creates a temporary database and initialises the schema.
///
/// # Returns
/// - NamedTempFile: keep it alive for the duration of the test
/// - String: database path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("temp path is not UTF-8")?
        .to_string();

    let conn = Connection::open(&db_path)?;
    init_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// Opens a connection with the crate's PRAGMAs.
pub fn open_test_connection(db_path: &str) -> Result<Connection, Box<dyn Error>> {
    Ok(livestock_manager::db::open_sqlite_connection(db_path)?)
}

fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS config_scope (
            scope_id TEXT PRIMARY KEY,
            scope_type TEXT NOT NULL,
            scope_key TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(scope_type, scope_key)
        );

        INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key)
        VALUES ('global', 'GLOBAL', 'global');

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id TEXT NOT NULL REFERENCES config_scope(scope_id) ON DELETE CASCADE,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );

        CREATE TABLE IF NOT EXISTS property (
            property_id TEXT PRIMARY KEY,
            owner_email TEXT NOT NULL,
            name TEXT NOT NULL,
            city TEXT,
            state TEXT,
            area_hectares REAL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS herd (
            herd_id TEXT PRIMARY KEY,
            property_id TEXT NOT NULL REFERENCES property(property_id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            animal_type TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS animal (
            animal_id TEXT PRIMARY KEY,
            herd_id TEXT NOT NULL REFERENCES herd(herd_id) ON DELETE CASCADE,
            tag TEXT NOT NULL,
            name TEXT,
            breed TEXT NOT NULL,
            sex TEXT,
            birth_date TEXT,
            current_weight_kg REAL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            UNIQUE(herd_id, tag)
        );

        CREATE TABLE IF NOT EXISTS weight_record (
            record_id TEXT PRIMARY KEY,
            animal_id TEXT NOT NULL REFERENCES animal(animal_id) ON DELETE CASCADE,
            weight_kg REAL NOT NULL,
            weighed_on TEXT NOT NULL,
            note TEXT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_weight_record_animal
            ON weight_record(animal_id, weighed_on);

        CREATE TABLE IF NOT EXISTS breed_reference (
            animal_type TEXT NOT NULL,
            breed TEXT NOT NULL,
            birth_weight_kg REAL,
            weight_at_10_months_kg REAL,
            adult_weight_male_kg REAL,
            adult_weight_female_kg REAL,
            sexual_maturity_months INTEGER,
            early_slaughter_days INTEGER,
            conventional_slaughter_days INTEGER,
            late_slaughter_days_min INTEGER,
            late_slaughter_days_max INTEGER,
            daily_weight_gain_grams REAL,
            PRIMARY KEY (animal_type, breed)
        );
        "#,
    )?;
    Ok(())
}

/// Writes one global config value.
pub fn insert_config(conn: &Connection, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "INSERT OR REPLACE INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

/// Overrides a subset of projection rules.
pub fn insert_test_config(conn: &Connection) -> Result<(), Box<dyn Error>> {
    let configs = vec![
        ("weaning_days", "90"),
        ("early_slaughter_tolerance_days", "10"),
        ("default_daily_gain_grams", "200"),
        ("adequate_min_pct", "85"),
        ("privileged_emails", "Admin@Coop.org, vet@coop.org"),
        ("locale", "en"),
    ];

    for (key, value) in configs {
        insert_config(conn, key, value)?;
    }
    Ok(())
}
