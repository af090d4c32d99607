// ==========================================
// Livestock Manager - API layer
// ==========================================
// Entry points for presentation layers (CLI, UI)
// ==========================================

pub mod access;
pub mod animal_api;
pub mod error;

pub use access::{AccessPolicy, AdminAllowlist, Principal};
pub use animal_api::{AnimalApi, AnimalDevelopmentSummary, AnimalProjectionView};
pub use error::{ApiError, ApiResult, ErrorResponse};
