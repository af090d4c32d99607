// ==========================================
// Livestock Manager - breed reference characteristics
// ==========================================
// One record per (animal_type, breed). Every scalar is optional and each
// projection rule degrades on its own when a field it needs is absent.
// ==========================================

use crate::domain::types::{AnimalType, Sex};
use serde::{Deserialize, Serialize};

// ==========================================
// BreedReference
// ==========================================
// Aligned with the breed_reference table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreedReference {
    pub animal_type: Option<AnimalType>,
    pub breed: String,

    // ===== Weight reference points (kg) =====
    pub birth_weight_kg: Option<f64>,
    pub weight_at_10_months_kg: Option<f64>,
    pub adult_weight_male_kg: Option<f64>,
    pub adult_weight_female_kg: Option<f64>,

    // ===== Reproduction =====
    pub sexual_maturity_months: Option<u32>,

    // ===== Slaughter windows (days of age) =====
    pub early_slaughter_days: Option<u32>,
    pub conventional_slaughter_days: Option<u32>,
    pub late_slaughter_days_min: Option<u32>,
    pub late_slaughter_days_max: Option<u32>,

    // ===== Growth rate =====
    pub daily_weight_gain_grams: Option<f64>,
}

impl BreedReference {
    /// Empty reference for a breed with no registered characteristics.
    pub fn empty(animal_type: Option<AnimalType>, breed: &str) -> Self {
        Self {
            animal_type,
            breed: breed.to_string(),
            ..Self::default()
        }
    }

    /// Adult weight for the given sex. Anything other than an explicit male
    /// uses the female reference.
    pub fn adult_weight_for(&self, sex: Option<Sex>) -> Option<f64> {
        match sex {
            Some(Sex::Male) => self.adult_weight_male_kg,
            _ => self.adult_weight_female_kg,
        }
    }

    /// Late window bounds, only when both ends are present.
    pub fn late_slaughter_range(&self) -> Option<(u32, u32)> {
        match (self.late_slaughter_days_min, self.late_slaughter_days_max) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    /// Daily gain in grams, ignoring non-positive values.
    pub fn positive_daily_gain(&self) -> Option<f64> {
        self.daily_weight_gain_grams.filter(|g| *g > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_weight_for_sex() {
        let breed = BreedReference {
            adult_weight_male_kg: Some(900.0),
            adult_weight_female_kg: Some(550.0),
            ..BreedReference::empty(Some(AnimalType::Bovine), "Nelore")
        };
        assert_eq!(breed.adult_weight_for(Some(Sex::Male)), Some(900.0));
        assert_eq!(breed.adult_weight_for(Some(Sex::Female)), Some(550.0));
        assert_eq!(breed.adult_weight_for(None), Some(550.0));
    }

    #[test]
    fn test_late_range_requires_both_ends() {
        let mut breed = BreedReference::empty(None, "Angus");
        breed.late_slaughter_days_min = Some(720);
        assert_eq!(breed.late_slaughter_range(), None);
        breed.late_slaughter_days_max = Some(900);
        assert_eq!(breed.late_slaughter_range(), Some((720, 900)));
    }

    #[test]
    fn test_positive_daily_gain() {
        let mut breed = BreedReference::empty(None, "Dorper");
        breed.daily_weight_gain_grams = Some(0.0);
        assert_eq!(breed.positive_daily_gain(), None);
        breed.daily_weight_gain_grams = Some(220.0);
        assert_eq!(breed.positive_daily_gain(), Some(220.0));
    }
}
