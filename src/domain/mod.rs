// ==========================================
// Livestock Manager - domain layer
// ==========================================
// Entities, enums and projection records
// No data access, no engine logic
// ==========================================

pub mod animal;
pub mod breed;
pub mod projection;
pub mod property;
pub mod types;

pub use animal::{Animal, AnimalProfile, WeightEntry, WeightRecord};
pub use breed::BreedReference;
pub use projection::{
    AnimalAge, DevelopmentAssessment, GrowthProjection, HighlightBand, ScheduleEvent,
    WeightCurvePoint,
};
pub use property::{Herd, Property};
pub use types::{
    AnimalType, DevelopmentStatus, HighlightBandKind, Recommendation, ScheduleEventKind, Sex,
    WindowStatus,
};
