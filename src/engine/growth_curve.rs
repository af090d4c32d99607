// ==========================================
// Livestock Manager - expected weight curve
// ==========================================
// Piecewise linear reference curve:
//   birth -> 10 months          (birth_weight -> weight_at_10_months)
//   10 -> 24 months, clamped    (weight_at_10_months -> adult weight)
// Missing reference points count as 0 kg.
// ==========================================

use crate::config::ProjectionRules;
use crate::domain::animal::AnimalProfile;
use crate::domain::breed::BreedReference;
use crate::domain::projection::{HighlightBand, WeightCurvePoint};
use crate::domain::types::{HighlightBandKind, Sex};
use crate::engine::age::{compute_ages, months_between, DAYS_PER_MONTH};
use chrono::NaiveDate;

/// Age (months) at which `weight_at_10_months` applies.
pub const TEN_MONTH_MARK: f64 = 10.0;

/// Months taken to go from the 10-month weight to the adult weight.
pub const ADULT_TRANSITION_MONTHS: f64 = 14.0;

/// Last month charted; the curve always has `CURVE_LAST_MONTH + 1` points.
pub const CURVE_LAST_MONTH: u32 = 24;

/// Expected weight (kg) at `age_months`.
///
/// Returns 0 when no reference point is known; callers treat a
/// non-positive result as "insufficient data".
pub fn expected_weight(age_months: f64, sex: Option<Sex>, breed: &BreedReference) -> f64 {
    let birth = breed.birth_weight_kg.unwrap_or(0.0);
    if age_months <= 0.0 {
        return birth;
    }

    let at_ten = breed.weight_at_10_months_kg.unwrap_or(0.0);
    if age_months <= TEN_MONTH_MARK {
        let progress = age_months / TEN_MONTH_MARK;
        return birth + (at_ten - birth) * progress;
    }

    match breed.adult_weight_for(sex) {
        Some(adult) => {
            let progress = ((age_months - TEN_MONTH_MARK) / ADULT_TRANSITION_MONTHS).min(1.0);
            at_ten + (adult - at_ten) * progress
        }
        None => at_ten,
    }
}

/// Chart bands active at `month`. Day offsets are converted with /30.
pub fn highlight_bands_at(
    month: f64,
    magnitude_kg: f64,
    breed: &BreedReference,
    rules: &ProjectionRules,
) -> Vec<HighlightBand> {
    let per_month = DAYS_PER_MONTH as f64;
    let mut bands = Vec::new();
    let mut push = |kind| bands.push(HighlightBand { kind, magnitude_kg });

    if month <= rules.weaning_days as f64 / per_month {
        push(HighlightBandKind::InitialGrowth);
    }

    if let Some(maturity) = breed.sexual_maturity_months {
        let start = maturity as f64;
        let end = start + rules.first_breeding_extra_months as f64;
        if month >= start && month <= end {
            push(HighlightBandKind::SexualMaturityWindow);
        }
    }

    if let Some(early) = breed.early_slaughter_days {
        let tol = rules.early_slaughter_tolerance_days as f64;
        let (start, end) = ((early as f64 - tol) / per_month, (early as f64 + tol) / per_month);
        if month >= start && month <= end {
            push(HighlightBandKind::EarlySlaughterWindow);
        }
    }

    if let Some(conventional) = breed.conventional_slaughter_days {
        let tol = rules.conventional_slaughter_tolerance_days as f64;
        let (start, end) = (
            (conventional as f64 - tol) / per_month,
            (conventional as f64 + tol) / per_month,
        );
        if month >= start && month <= end {
            push(HighlightBandKind::ConventionalSlaughterWindow);
        }
    }

    if let Some((min, max)) = breed.late_slaughter_range() {
        if month >= min as f64 / per_month && month <= max as f64 / per_month {
            push(HighlightBandKind::LateSlaughterWindow);
        }
    }

    bands
}

/// Month-by-month expected/observed curve, months 0..=24.
///
/// Empty without a birth date.
pub fn build_curve(
    profile: &AnimalProfile,
    breed: &BreedReference,
    today: NaiveDate,
    rules: &ProjectionRules,
) -> Vec<WeightCurvePoint> {
    let (birth, age) = match (profile.birth_date, compute_ages(profile.birth_date, today)) {
        (Some(birth), Some(age)) => (birth, age),
        _ => return Vec::new(),
    };

    let observations: Vec<(i64, f64)> = profile
        .sorted_history()
        .into_iter()
        .map(|e| (months_between(birth, e.date), e.weight_kg))
        .collect();

    let birth_weight = profile.birth_weight_entry().map(|e| e.weight_kg);
    let current_weight = profile.resolved_current_weight();
    // whole months, as in the assessment
    let current_month = age.months;

    (0..=CURVE_LAST_MONTH)
        .map(|month| {
            let m = month as i64;
            let expected = expected_weight(month as f64, profile.sex, breed);

            // closest weighing within one month; the earliest wins a tie
            let closest = observations
                .iter()
                .filter(|(em, _)| (em - m).abs() <= 1)
                .min_by_key(|(em, _)| (em - m).abs())
                .map(|(_, w)| *w);

            let observed = closest.or_else(|| {
                if m == 0 && birth_weight.is_some() {
                    birth_weight
                } else if m == current_month {
                    current_weight
                } else {
                    None
                }
            });

            WeightCurvePoint {
                age_months: month,
                expected_weight_kg: expected,
                observed_weight_kg: observed,
                highlight_bands: highlight_bands_at(month as f64, expected, breed, rules),
            }
        })
        .collect()
}
