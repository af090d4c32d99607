// ==========================================
// Livestock Manager - engine layer
// ==========================================
// Growth projection rules. No SQL, every schedule rule outputs a reason.
// ==========================================

pub mod age;
pub mod development;
pub mod growth_curve;
pub mod projector;
pub mod schedule;

pub use age::{compute_ages, DAYS_PER_MONTH};
pub use growth_curve::expected_weight;
pub use projector::GrowthProjector;
