// ==========================================
// Livestock Manager - animal growth API
// ==========================================
// Loads records, checks access, runs the GrowthProjector
// and records weighings
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::api::access::{AccessPolicy, Principal};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::animal::{Animal, AnimalProfile, WeightRecord};
use crate::domain::breed::BreedReference;
use crate::domain::projection::{GrowthProjection, ScheduleEvent};
use crate::domain::property::Herd;
use crate::domain::types::{AnimalType, DevelopmentStatus, Recommendation, Sex};
use crate::engine::GrowthProjector;
use crate::repository::{
    AnimalRepository, BreedReferenceRepository, PropertyRepository, WeightRecordRepository,
};

// ==========================================
// View objects
// ==========================================

/// Projection of one animal with the identifying fields a screen needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalProjectionView {
    pub animal_id: String,
    pub tag: String,
    pub name: Option<String>,
    pub animal_type: AnimalType,
    pub breed: String,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    /// false when no reference row exists and an empty one was used
    pub breed_reference_found: bool,
    pub projection: GrowthProjection,
    /// Localised notice when the projection is unavailable
    pub message: Option<String>,
}

/// One row of the herd development overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalDevelopmentSummary {
    pub animal_id: String,
    pub tag: String,
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub age_months: Option<i64>,
    pub current_weight_kg: Option<f64>,
    pub expected_weight_kg: Option<f64>,
    pub percent_of_expected: Option<f64>,
    pub status: DevelopmentStatus,
    pub recommendation: Option<Recommendation>,
    pub next_event: Option<ScheduleEvent>,
}

impl AnimalDevelopmentSummary {
    fn from_projection(animal: &Animal, projection: GrowthProjection) -> Self {
        let assessment = projection.assessment;
        Self {
            animal_id: animal.animal_id.clone(),
            tag: animal.tag.clone(),
            name: animal.name.clone(),
            sex: animal.sex,
            age_months: assessment.age_months,
            current_weight_kg: assessment.current_weight_kg,
            expected_weight_kg: assessment.expected_weight_kg,
            percent_of_expected: assessment.percent_of_expected,
            status: assessment.status,
            recommendation: assessment.recommendation,
            next_event: projection.schedule.into_iter().next(),
        }
    }
}

// ==========================================
// AnimalApi
// ==========================================
pub struct AnimalApi {
    animal_repo: Arc<AnimalRepository>,
    weight_repo: Arc<WeightRecordRepository>,
    property_repo: Arc<PropertyRepository>,
    breed_repo: Arc<BreedReferenceRepository>,
    access_policy: Arc<dyn AccessPolicy>,
    projector: GrowthProjector,
}

impl AnimalApi {
    pub fn new(
        animal_repo: Arc<AnimalRepository>,
        weight_repo: Arc<WeightRecordRepository>,
        property_repo: Arc<PropertyRepository>,
        breed_repo: Arc<BreedReferenceRepository>,
        access_policy: Arc<dyn AccessPolicy>,
        projector: GrowthProjector,
    ) -> Self {
        Self {
            animal_repo,
            weight_repo,
            property_repo,
            breed_repo,
            access_policy,
            projector,
        }
    }

    pub fn projector(&self) -> &GrowthProjector {
        &self.projector
    }

    /// Full projection of one animal.
    ///
    /// # Returns
    /// - Ok(view): `view.projection.available == false` when the birth date is unknown
    /// - Err(NotFound): animal, herd or property missing
    /// - Err(Forbidden): principal neither owns the property nor is privileged
    #[instrument(skip(self, principal), fields(principal = %principal.email))]
    pub fn get_animal_projection(
        &self,
        principal: &Principal,
        animal_id: &str,
        today: NaiveDate,
    ) -> ApiResult<AnimalProjectionView> {
        let _timer = crate::timing::OpTimer::start("api.get_animal_projection");
        if animal_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("animal_id must not be empty".to_string()));
        }

        let animal = self.load_animal(animal_id)?;
        let herd = self.load_herd(&animal.herd_id)?;
        self.authorize(principal, &herd.property_id, &format!("animal {}", animal_id))?;

        let weights = self.weight_repo.list_by_animal(animal_id)?;
        let (breed, breed_reference_found) = self.resolve_breed(herd.animal_type, &animal.breed)?;

        let profile = AnimalProfile::from_records(&animal, &weights);
        let projection = self.projector.project(&profile, &breed, today);

        let message = if projection.available {
            None
        } else {
            Some(crate::i18n::t_with_args(
                "projection.unavailable",
                &[("tag", animal.tag.as_str())],
            ))
        };

        Ok(AnimalProjectionView {
            animal_id: animal.animal_id,
            tag: animal.tag,
            name: animal.name,
            animal_type: herd.animal_type,
            breed: animal.breed,
            sex: animal.sex,
            birth_date: animal.birth_date,
            breed_reference_found,
            projection,
            message,
        })
    }

    /// Development overview of every animal in a herd, ordered by tag.
    #[instrument(skip(self, principal), fields(principal = %principal.email))]
    pub fn list_herd_development(
        &self,
        principal: &Principal,
        herd_id: &str,
        today: NaiveDate,
    ) -> ApiResult<Vec<AnimalDevelopmentSummary>> {
        let _timer = crate::timing::OpTimer::start("api.list_herd_development");
        if herd_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("herd_id must not be empty".to_string()));
        }

        let herd = self.load_herd(herd_id)?;
        self.authorize(principal, &herd.property_id, &format!("herd {}", herd_id))?;

        let animals = self.animal_repo.list_by_herd(herd_id)?;

        // one lookup per distinct breed
        let mut breeds: HashMap<String, BreedReference> = HashMap::new();
        let mut items = Vec::with_capacity(animals.len());
        for animal in &animals {
            let key = animal.breed.trim().to_lowercase();
            if !breeds.contains_key(&key) {
                let (breed, _) = self.resolve_breed(herd.animal_type, &animal.breed)?;
                breeds.insert(key.clone(), breed);
            }
            let weights = self.weight_repo.list_by_animal(&animal.animal_id)?;
            let breed = breeds.get(&key).cloned().unwrap_or_default();
            items.push((AnimalProfile::from_records(animal, &weights), breed));
        }

        let projections = self.projector.project_batch(&items, today);
        Ok(animals
            .iter()
            .zip(projections)
            .map(|(animal, projection)| {
                AnimalDevelopmentSummary::from_projection(animal, projection)
            })
            .collect())
    }

    /// Stores a weighing; refreshes the animal's current weight when it is the latest.
    ///
    /// # Errors
    /// - InvalidInput: weight not positive, or date before the birth date
    /// - NotFound / Forbidden: as for `get_animal_projection`
    #[instrument(skip(self, principal, note), fields(principal = %principal.email))]
    pub fn record_weighing(
        &self,
        principal: &Principal,
        animal_id: &str,
        weight_kg: f64,
        weighed_on: NaiveDate,
        note: Option<String>,
    ) -> ApiResult<WeightRecord> {
        let _timer = crate::timing::OpTimer::start("api.record_weighing");
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "weight must be positive, got {}",
                weight_kg
            )));
        }

        let animal = self.load_animal(animal_id)?;
        let herd = self.load_herd(&animal.herd_id)?;
        self.authorize(principal, &herd.property_id, &format!("animal {}", animal_id))?;

        if let Some(birth) = animal.birth_date {
            if weighed_on < birth {
                return Err(ApiError::InvalidInput(format!(
                    "weighing date {} is before birth date {}",
                    weighed_on, birth
                )));
            }
        }

        let existing = self.weight_repo.list_by_animal(animal_id)?;
        let is_latest = existing.iter().all(|r| r.weighed_on <= weighed_on);

        let record = WeightRecord {
            record_id: Uuid::new_v4().to_string(),
            animal_id: animal_id.to_string(),
            weight_kg,
            weighed_on,
            note: note
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: Utc::now(),
        };
        self.weight_repo.insert(&record)?;

        if is_latest {
            self.animal_repo.update_current_weight(animal_id, weight_kg)?;
        }

        info!(
            animal_id = animal_id,
            weight_kg,
            weighed_on = %weighed_on,
            updated_current = is_latest,
            "weighing recorded"
        );
        Ok(record)
    }

    // ==========================================
    // helpers
    // ==========================================

    fn load_animal(&self, animal_id: &str) -> ApiResult<Animal> {
        self.animal_repo
            .find_by_id(animal_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Animal(id={})", animal_id)))
    }

    fn load_herd(&self, herd_id: &str) -> ApiResult<Herd> {
        self.property_repo
            .find_herd(herd_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Herd(id={})", herd_id)))
    }

    fn authorize(
        &self,
        principal: &Principal,
        property_id: &str,
        resource: &str,
    ) -> ApiResult<()> {
        if self.access_policy.is_privileged(principal) {
            return Ok(());
        }

        let property = self
            .property_repo
            .find_property(property_id)?
            .ok_or_else(|| ApiError::NotFound(format!("Property(id={})", property_id)))?;

        if property.is_owned_by(&principal.email) {
            Ok(())
        } else {
            warn!(
                principal = %principal.email,
                resource = resource,
                "access denied"
            );
            Err(ApiError::Forbidden {
                principal: principal.email.clone(),
                resource: resource.to_string(),
            })
        }
    }

    /// Reference row for a breed, or an empty reference when none is registered.
    fn resolve_breed(
        &self,
        animal_type: AnimalType,
        breed: &str,
    ) -> ApiResult<(BreedReference, bool)> {
        match self.breed_repo.find(animal_type, breed)? {
            Some(reference) => Ok((reference, true)),
            None => {
                warn!(
                    animal_type = %animal_type,
                    breed = breed,
                    "no breed reference, projecting with empty reference"
                );
                Ok((BreedReference::empty(Some(animal_type), breed), false))
            }
        }
    }
}
