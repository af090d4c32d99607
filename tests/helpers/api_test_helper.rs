// ==========================================
// API integration-test environment
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tempfile::NamedTempFile;

use livestock_manager::api::{AccessPolicy, AdminAllowlist, AnimalApi, Principal};
use livestock_manager::config::ProjectionConfigReader;
use livestock_manager::domain::types::AnimalType;
use livestock_manager::engine::GrowthProjector;
use livestock_manager::repository::{
    AnimalRepository, BreedReferenceRepository, PropertyRepository, WeightRecordRepository,
};

use super::mock_config::MockConfig;
use super::test_data_builder::{herd, nelore, property};

pub const OWNER_EMAIL: &str = "joao@fazenda.com";
pub const OTHER_EMAIL: &str = "maria@sitio.com";
pub const ADMIN_EMAIL: &str = "admin@coop.org";

pub const PROPERTY_ID: &str = "P001";
pub const HERD_ID: &str = "H001";

/// Database, repositories and an AnimalApi wired like AppState.
pub struct ApiTestEnv {
    pub _temp_file: NamedTempFile,
    pub db_path: String,
    pub conn: Arc<Mutex<Connection>>,
    pub animal_repo: Arc<AnimalRepository>,
    pub weight_repo: Arc<WeightRecordRepository>,
    pub property_repo: Arc<PropertyRepository>,
    pub breed_repo: Arc<BreedReferenceRepository>,
    pub animal_api: AnimalApi,
}

impl ApiTestEnv {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_config(MockConfig::default())
    }

    pub fn with_config(config: MockConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let (temp_file, db_path) = test_helpers::create_test_db()?;
        let conn = Arc::new(Mutex::new(test_helpers::open_test_connection(&db_path)?));

        let animal_repo = Arc::new(AnimalRepository::from_connection(conn.clone()));
        let weight_repo = Arc::new(WeightRecordRepository::from_connection(conn.clone()));
        let property_repo = Arc::new(PropertyRepository::from_connection(conn.clone()));
        let breed_repo = Arc::new(BreedReferenceRepository::from_connection(conn.clone()));

        let access_policy: Arc<dyn AccessPolicy> = Arc::new(AdminAllowlist::from_config(&config));
        let projector = GrowthProjector::with_rules(config.get_projection_rules()?);

        let animal_api = AnimalApi::new(
            animal_repo.clone(),
            weight_repo.clone(),
            property_repo.clone(),
            breed_repo.clone(),
            access_policy,
            projector,
        );

        Ok(Self {
            _temp_file: temp_file,
            db_path,
            conn,
            animal_repo,
            weight_repo,
            property_repo,
            breed_repo,
            animal_api,
        })
    }

    /// Property P001 owned by OWNER_EMAIL, bovine herd H001 and the Nelore reference.
    pub fn seed_farm(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.property_repo
            .create_property(&property(PROPERTY_ID, OWNER_EMAIL))?;
        self.property_repo
            .create_herd(&herd(HERD_ID, PROPERTY_ID, AnimalType::Bovine))?;
        self.breed_repo.upsert(&nelore())?;
        Ok(())
    }
}

pub fn owner() -> Principal {
    Principal::new(OWNER_EMAIL)
}

pub fn stranger() -> Principal {
    Principal::new(OTHER_EMAIL)
}

pub fn admin() -> Principal {
    Principal::new(ADMIN_EMAIL)
}
