// ==========================================
// Livestock Manager - application state
// ==========================================
// Wires repositories, configuration and APIs around one shared connection
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{AccessPolicy, AdminAllowlist, AnimalApi};
use crate::config::{ConfigManager, ProjectionConfigReader, ProjectionRules};
use crate::engine::GrowthProjector;
use crate::repository::{
    AnimalRepository, BreedReferenceRepository, PropertyRepository, WeightRecordRepository,
};

/// Env var overriding the database path.
pub const DB_PATH_ENV: &str = "LIVESTOCK_DB_PATH";

/// Application state shared by presentation layers.
pub struct AppState {
    pub db_path: String,

    /// Growth projection and weighing API
    pub animal_api: Arc<AnimalApi>,

    pub config_manager: Arc<ConfigManager>,
}

impl AppState {
    /// Opens the database and builds every layer.
    ///
    /// Configuration is read once: projection rules, locale and the
    /// privileged allowlist. Unreadable values fall back to defaults.
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("initialising AppState, database: {}", db_path);

        let mut conn = crate::db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("cannot open database: {}", e))?;
        let counting = crate::timing::attach_statement_counter(&mut conn);
        tracing::debug!(counting, "sql statement counting");
        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // Repositories
        // ==========================================
        let animal_repo = Arc::new(AnimalRepository::from_connection(conn.clone()));
        let weight_repo = Arc::new(WeightRecordRepository::from_connection(conn.clone()));
        let property_repo = Arc::new(PropertyRepository::from_connection(conn.clone()));
        let breed_repo = Arc::new(BreedReferenceRepository::from_connection(conn.clone()));

        // ==========================================
        // Configuration
        // ==========================================
        let config_manager = Arc::new(
            ConfigManager::from_connection(conn.clone())
                .map_err(|e| format!("cannot create ConfigManager: {}", e))?,
        );

        let rules = config_manager.get_projection_rules().unwrap_or_else(|e| {
            tracing::warn!("projection rules unreadable, using defaults: {}", e);
            ProjectionRules::default()
        });

        match config_manager.get_locale() {
            Ok(locale) => crate::i18n::set_locale(&locale),
            Err(e) => tracing::warn!(
                "locale unreadable, keeping {}: {}",
                crate::i18n::current_locale(),
                e
            ),
        }

        let access_policy: Arc<dyn AccessPolicy> =
            Arc::new(AdminAllowlist::from_config(config_manager.as_ref()));

        // ==========================================
        // APIs
        // ==========================================
        let animal_api = Arc::new(AnimalApi::new(
            animal_repo,
            weight_repo,
            property_repo,
            breed_repo,
            access_policy,
            GrowthProjector::with_rules(rules),
        ));

        tracing::info!("AppState ready");
        Ok(Self {
            db_path,
            animal_api,
            config_manager,
        })
    }
}

/// Database path: `LIVESTOCK_DB_PATH`, else the user data directory,
/// else `./livestock.db`.
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./livestock.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let dir = data_dir.join("livestock-manager-dev");
        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("livestock-manager");

        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("livestock.db");
        }
    }

    path.to_string_lossy().to_string()
}
