// ==========================================
// Livestock Manager - development assessment
// ==========================================
// Classifies current weight against the expected weight for age:
//   adequate_min <= pct <= adequate_max  -> AdequateDevelopment
//   pct < adequate_min                   -> BelowExpected (urgent below urgent_below)
//   pct > adequate_max                   -> AboveExpected
// ==========================================

use crate::config::ProjectionRules;
use crate::domain::animal::AnimalProfile;
use crate::domain::breed::BreedReference;
use crate::domain::projection::DevelopmentAssessment;
use crate::domain::types::{DevelopmentStatus, Recommendation};
use crate::engine::age::compute_ages;
use crate::engine::growth_curve::expected_weight;
use crate::i18n;
use chrono::NaiveDate;

/// Percent of expected weight. Multiplying first keeps round inputs exact
/// (110 kg of 100 kg is exactly 110.0).
pub fn percent_of_expected(current_kg: f64, expected_kg: f64) -> Option<f64> {
    if expected_kg > 0.0 {
        Some(current_kg * 100.0 / expected_kg)
    } else {
        None
    }
}

/// Status and recommendation for a percent of expected weight.
pub fn classify(percent: f64, rules: &ProjectionRules) -> (DevelopmentStatus, Recommendation) {
    if percent < rules.adequate_min_pct {
        let recommendation = if percent < rules.urgent_below_pct {
            Recommendation::UrgentHealthAssessment
        } else {
            Recommendation::IncreaseSupplementation
        };
        (DevelopmentStatus::BelowExpected, recommendation)
    } else if percent > rules.adequate_max_pct {
        (DevelopmentStatus::AboveExpected, Recommendation::ContinueMonitoring)
    } else {
        (
            DevelopmentStatus::AdequateDevelopment,
            Recommendation::MaintainManagement,
        )
    }
}

/// Weight-for-age assessment on `today`.
pub fn assess_development(
    profile: &AnimalProfile,
    breed: &BreedReference,
    today: NaiveDate,
    rules: &ProjectionRules,
) -> DevelopmentAssessment {
    let age = match compute_ages(profile.birth_date, today) {
        Some(age) => age,
        None => return DevelopmentAssessment::insufficient_data(),
    };

    let expected = expected_weight(age.months as f64, profile.sex, breed);
    let expected_weight_kg = if expected > 0.0 { Some(expected) } else { None };
    let current_weight_kg = profile.resolved_current_weight();

    let mut assessment = DevelopmentAssessment {
        age_days: Some(age.days),
        age_months: Some(age.months),
        expected_weight_kg,
        current_weight_kg,
        percent_of_expected: None,
        status: DevelopmentStatus::InsufficientData,
        recommendation: None,
        recommendation_text: None,
    };

    let percent = match (current_weight_kg, expected_weight_kg) {
        (Some(current), Some(expected)) => percent_of_expected(current, expected),
        _ => None,
    };

    if let Some(percent) = percent {
        let (status, recommendation) = classify(percent, rules);
        assessment.percent_of_expected = Some(percent);
        assessment.status = status;
        assessment.recommendation = Some(recommendation);
        assessment.recommendation_text = Some(i18n::t(recommendation.i18n_key()));
    }

    assessment
}
