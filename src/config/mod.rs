// ==========================================
// Livestock Manager - configuration layer
// ==========================================
// Storage: config_kv table, global scope
// ==========================================

pub mod config_manager;
pub mod projection_config;

pub use config_manager::{config_keys, ConfigManager};
pub use projection_config::{ProjectionConfigReader, ProjectionRules};
