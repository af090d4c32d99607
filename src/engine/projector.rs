// ==========================================
// Livestock Manager - growth projector
// ==========================================
// Input: AnimalProfile + BreedReference + today
// Output: DevelopmentAssessment + ScheduleEvent[] + WeightCurvePoint[]
// Pure and synchronous; no I/O, no shared state
// ==========================================

use crate::config::ProjectionRules;
use crate::domain::animal::AnimalProfile;
use crate::domain::breed::BreedReference;
use crate::domain::projection::{
    AnimalAge, DevelopmentAssessment, GrowthProjection, ScheduleEvent, WeightCurvePoint,
};
use crate::domain::types::Sex;
use crate::engine::{age, development, growth_curve, schedule};
use chrono::NaiveDate;
use tracing::{debug, instrument};

// ==========================================
// GrowthProjector
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct GrowthProjector {
    rules: ProjectionRules,
}

impl GrowthProjector {
    /// Projector with the reference rule constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Projector with configured rule constants.
    pub fn with_rules(rules: ProjectionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ProjectionRules {
        &self.rules
    }

    // ==========================================
    // Single operations
    // ==========================================

    pub fn compute_ages(
        &self,
        birth_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Option<AnimalAge> {
        age::compute_ages(birth_date, today)
    }

    pub fn expected_weight(
        &self,
        age_months: f64,
        sex: Option<Sex>,
        breed: &BreedReference,
    ) -> f64 {
        growth_curve::expected_weight(age_months, sex, breed)
    }

    pub fn assess_development(
        &self,
        profile: &AnimalProfile,
        breed: &BreedReference,
        today: NaiveDate,
    ) -> DevelopmentAssessment {
        development::assess_development(profile, breed, today, &self.rules)
    }

    pub fn build_schedule(
        &self,
        profile: &AnimalProfile,
        breed: &BreedReference,
        today: NaiveDate,
    ) -> Vec<ScheduleEvent> {
        schedule::build_schedule(profile, breed, today, &self.rules)
    }

    pub fn build_curve(
        &self,
        profile: &AnimalProfile,
        breed: &BreedReference,
        today: NaiveDate,
    ) -> Vec<WeightCurvePoint> {
        growth_curve::build_curve(profile, breed, today, &self.rules)
    }

    // ==========================================
    // Full projection
    // ==========================================

    /// All three outputs; `GrowthProjection::unavailable()` without a birth date.
    #[instrument(skip(self, profile, breed), fields(breed = %breed.breed))]
    pub fn project(
        &self,
        profile: &AnimalProfile,
        breed: &BreedReference,
        today: NaiveDate,
    ) -> GrowthProjection {
        if profile.birth_date.is_none() {
            debug!("birth date missing, projection unavailable");
            return GrowthProjection::unavailable();
        }

        let projection = GrowthProjection {
            available: true,
            assessment: self.assess_development(profile, breed, today),
            schedule: self.build_schedule(profile, breed, today),
            curve: self.build_curve(profile, breed, today),
        };

        debug!(
            status = %projection.assessment.status,
            events = projection.schedule.len(),
            curve_points = projection.curve.len(),
            "projection computed"
        );
        projection
    }

    /// Projects several animals (herd overview), keeping input order.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub fn project_batch(
        &self,
        items: &[(AnimalProfile, BreedReference)],
        today: NaiveDate,
    ) -> Vec<GrowthProjection> {
        items
            .iter()
            .map(|(profile, breed)| self.project(profile, breed, today))
            .collect()
    }
}
