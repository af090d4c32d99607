// ==========================================
// Livestock Manager - configuration manager
// ==========================================
// Loads and overrides configuration values
// Storage: config_kv table (key-value + scope)
// ==========================================

use crate::config::projection_config::{defaults, ProjectionConfigReader, ProjectionRules};
use crate::db::open_sqlite_connection;
use rusqlite::{params, Connection};
use serde_json::json;
use std::collections::HashMap;
use std::error::Error;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Opens the database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn Error>> {
        let conn = open_sqlite_connection(db_path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Reuses an existing connection (PRAGMAs are re-applied, idempotent).
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Result<Self, Box<dyn Error>> {
        {
            let conn_guard = conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;
            crate::db::configure_sqlite_connection(&conn_guard)?;
        }

        Ok(Self { conn })
    }

    /// Reads a value from the global scope.
    fn get_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;

        let result = conn.query_row(
            "SELECT value FROM config_kv WHERE scope_id = 'global' AND key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(Box::new(e)),
        }
    }

    /// Public read of a global value.
    pub fn get_global_config_value(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        self.get_config_value(key)
    }

    /// Writes (upserts) a global value.
    pub fn set_global_config_value(&self, key: &str, value: &str) -> Result<(), Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES ('global', ?1, ?2)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?2",
            params![key, value],
        )?;
        tracing::info!(config_key = key, value = value, "config value updated");
        Ok(())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get_config_value(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Reads and parses a value, falling back to `default` when absent or malformed.
    fn get_parsed_or<T>(&self, key: &str, default: T) -> Result<T, Box<dyn Error>>
    where
        T: FromStr + Copy,
    {
        let raw = match self.get_config_value(key)? {
            Some(v) => v,
            None => return Ok(default),
        };
        match raw.trim().parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                tracing::warn!(
                    config_key = key,
                    raw_value = %raw,
                    "malformed config value, using default"
                );
                Ok(default)
            }
        }
    }

    /// Like `get_parsed_or`, but NaN and infinities also fall back to `default`.
    fn get_finite_or(&self, key: &str, default: f64) -> Result<f64, Box<dyn Error>> {
        let value = self.get_parsed_or(key, default)?;
        if value.is_finite() {
            Ok(value)
        } else {
            tracing::warn!(
                config_key = key,
                raw_value = %value,
                "non-finite config value, using default"
            );
            Ok(default)
        }
    }

    /// Snapshot of every global value as a JSON object.
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let conn = self.conn.lock().map_err(|e| format!("lock poisoned: {}", e))?;

        let mut stmt = conn.prepare(
            "SELECT key, value FROM config_kv WHERE scope_id = 'global' ORDER BY key",
        )?;

        let mut config_map: HashMap<String, String> = HashMap::new();
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (key, value) = row?;
            config_map.insert(key, value);
        }

        Ok(serde_json::to_string(&json!(config_map))?)
    }
}

// ==========================================
// ProjectionConfigReader implementation
// ==========================================
impl ProjectionConfigReader for ConfigManager {
    fn get_projection_rules(&self) -> Result<ProjectionRules, Box<dyn Error>> {
        let mut rules = ProjectionRules {
            weaning_days: self.get_parsed_or(config_keys::WEANING_DAYS, defaults::weaning_days())?,
            early_slaughter_tolerance_days: self.get_parsed_or(
                config_keys::EARLY_SLAUGHTER_TOLERANCE_DAYS,
                defaults::early_slaughter_tolerance_days(),
            )?,
            conventional_slaughter_tolerance_days: self.get_parsed_or(
                config_keys::CONVENTIONAL_SLAUGHTER_TOLERANCE_DAYS,
                defaults::conventional_slaughter_tolerance_days(),
            )?,
            first_breeding_extra_months: self.get_parsed_or(
                config_keys::FIRST_BREEDING_EXTRA_MONTHS,
                defaults::first_breeding_extra_months(),
            )?,
            adult_weight_ratio_threshold: self.get_finite_or(
                config_keys::ADULT_WEIGHT_RATIO_THRESHOLD,
                defaults::adult_weight_ratio_threshold(),
            )?,
            default_daily_gain_grams: self.get_finite_or(
                config_keys::DEFAULT_DAILY_GAIN_GRAMS,
                defaults::default_daily_gain_grams(),
            )?,
            adequate_min_pct: self
                .get_finite_or(config_keys::ADEQUATE_MIN_PCT, defaults::adequate_min_pct())?,
            adequate_max_pct: self
                .get_finite_or(config_keys::ADEQUATE_MAX_PCT, defaults::adequate_max_pct())?,
            urgent_below_pct: self
                .get_finite_or(config_keys::URGENT_BELOW_PCT, defaults::urgent_below_pct())?,
        };

        // integer offsets are independent; only the float thresholds are reset
        if let Err(reason) = rules.validate() {
            tracing::warn!(reason = %reason, "inconsistent projection thresholds, using defaults");
            let fallback = ProjectionRules::default();
            rules.adult_weight_ratio_threshold = fallback.adult_weight_ratio_threshold;
            rules.default_daily_gain_grams = fallback.default_daily_gain_grams;
            rules.adequate_min_pct = fallback.adequate_min_pct;
            rules.adequate_max_pct = fallback.adequate_max_pct;
            rules.urgent_below_pct = fallback.urgent_below_pct;
        }

        Ok(rules)
    }

    fn get_privileged_emails(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::PRIVILEGED_EMAILS, "")?;
        Ok(value
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect())
    }

    fn get_locale(&self) -> Result<String, Box<dyn Error>> {
        let value = self.get_config_or_default(config_keys::LOCALE, "pt-BR")?;
        let value = value.trim();
        if value.is_empty() {
            Ok("pt-BR".to_string())
        } else {
            Ok(value.to_string())
        }
    }
}

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // Life-stage offsets
    pub const WEANING_DAYS: &str = "weaning_days";
    pub const FIRST_BREEDING_EXTRA_MONTHS: &str = "first_breeding_extra_months";

    // Slaughter windows
    pub const EARLY_SLAUGHTER_TOLERANCE_DAYS: &str = "early_slaughter_tolerance_days";
    pub const CONVENTIONAL_SLAUGHTER_TOLERANCE_DAYS: &str =
        "conventional_slaughter_tolerance_days";

    // Adult weight projection
    pub const ADULT_WEIGHT_RATIO_THRESHOLD: &str = "adult_weight_ratio_threshold";
    pub const DEFAULT_DAILY_GAIN_GRAMS: &str = "default_daily_gain_grams";

    // Development classification
    pub const ADEQUATE_MIN_PCT: &str = "adequate_min_pct";
    pub const ADEQUATE_MAX_PCT: &str = "adequate_max_pct";
    pub const URGENT_BELOW_PCT: &str = "urgent_below_pct";

    // Access and presentation
    pub const PRIVILEGED_EMAILS: &str = "privileged_emails"; // comma separated
    pub const LOCALE: &str = "locale";
}
