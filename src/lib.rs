// ==========================================
// Livestock Manager - core library
// ==========================================
// Growth projection and slaughter-window scheduling for herds
// Stack: Rust + SQLite
// ==========================================

rust_i18n::i18n!("locales", fallback = "pt-BR");

// ==========================================
// Modules
// ==========================================

// Domain - records and value types
pub mod domain;

// Repositories - data access
pub mod repository;

// Engine - growth projection rules
pub mod engine;

// Configuration
pub mod config;

// SQLite connection setup
pub mod db;

pub mod logging;

pub mod i18n;

// Operation timing
pub mod timing;

// API - use cases
pub mod api;

// Application wiring
pub mod app;

// ==========================================
// Re-exports
// ==========================================

pub use domain::types::{
    AnimalType, DevelopmentStatus, HighlightBandKind, Recommendation, ScheduleEventKind, Sex,
    WindowStatus,
};

pub use domain::{
    Animal, AnimalProfile, BreedReference, DevelopmentAssessment, GrowthProjection, Herd, Property,
    ScheduleEvent, WeightCurvePoint, WeightEntry, WeightRecord,
};

pub use engine::GrowthProjector;

pub use api::{AnimalApi, ApiError, ApiResult, Principal};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Livestock Manager";
