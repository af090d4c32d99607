// ==========================================
// Livestock Manager - repository layer
// ==========================================
// Hides SQLite behind typed records
// All queries are parameterised
// Schema is owned by the registration (CRUD) side of the application
// ==========================================

pub mod animal_repo;
pub mod breed_repo;
pub mod error;
pub mod property_repo;

pub use animal_repo::{AnimalRepository, WeightRecordRepository};
pub use breed_repo::BreedReferenceRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use property_repo::PropertyRepository;
