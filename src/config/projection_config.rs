// ==========================================
// Livestock Manager - projection rule configuration
// ==========================================
// ProjectionRules: constants of the growth projector
// ProjectionConfigReader: read-only access to them (no writes, no logic)
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;

/// Constants driving the growth projector.
///
/// `Default` holds the reference values; the classification and window
/// tests are written against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRules {
    /// Weaning offset from birth (days)
    #[serde(default = "defaults::weaning_days")]
    pub weaning_days: u32,

    /// ± tolerance around the early slaughter offset (days)
    #[serde(default = "defaults::early_slaughter_tolerance_days")]
    pub early_slaughter_tolerance_days: u32,

    /// ± tolerance around the conventional slaughter offset (days)
    #[serde(default = "defaults::conventional_slaughter_tolerance_days")]
    pub conventional_slaughter_tolerance_days: u32,

    /// First breeding = sexual maturity + this many months
    #[serde(default = "defaults::first_breeding_extra_months")]
    pub first_breeding_extra_months: u32,

    /// AdultWeightReached is emitted below this current/adult ratio
    #[serde(default = "defaults::adult_weight_ratio_threshold")]
    pub adult_weight_ratio_threshold: f64,

    /// Daily gain used when the breed has none (grams)
    #[serde(default = "defaults::default_daily_gain_grams")]
    pub default_daily_gain_grams: f64,

    /// Adequate band, inclusive on both ends (% of expected)
    #[serde(default = "defaults::adequate_min_pct")]
    pub adequate_min_pct: f64,
    #[serde(default = "defaults::adequate_max_pct")]
    pub adequate_max_pct: f64,

    /// Below this percent the recommendation becomes urgent
    #[serde(default = "defaults::urgent_below_pct")]
    pub urgent_below_pct: f64,
}

pub(crate) mod defaults {
    pub fn weaning_days() -> u32 {
        75
    }
    pub fn early_slaughter_tolerance_days() -> u32 {
        15
    }
    pub fn conventional_slaughter_tolerance_days() -> u32 {
        30
    }
    pub fn first_breeding_extra_months() -> u32 {
        2
    }
    pub fn adult_weight_ratio_threshold() -> f64 {
        0.95
    }
    pub fn default_daily_gain_grams() -> f64 {
        150.0
    }
    pub fn adequate_min_pct() -> f64 {
        90.0
    }
    pub fn adequate_max_pct() -> f64 {
        110.0
    }
    pub fn urgent_below_pct() -> f64 {
        75.0
    }
}

impl Default for ProjectionRules {
    fn default() -> Self {
        Self {
            weaning_days: defaults::weaning_days(),
            early_slaughter_tolerance_days: defaults::early_slaughter_tolerance_days(),
            conventional_slaughter_tolerance_days:
                defaults::conventional_slaughter_tolerance_days(),
            first_breeding_extra_months: defaults::first_breeding_extra_months(),
            adult_weight_ratio_threshold: defaults::adult_weight_ratio_threshold(),
            default_daily_gain_grams: defaults::default_daily_gain_grams(),
            adequate_min_pct: defaults::adequate_min_pct(),
            adequate_max_pct: defaults::adequate_max_pct(),
            urgent_below_pct: defaults::urgent_below_pct(),
        }
    }
}

impl ProjectionRules {
    /// Checks the float constants are usable.
    ///
    /// # Errors
    /// - a value is NaN or infinite
    /// - the gain or adult ratio is not positive
    /// - the bands are not ordered `urgent <= adequate_min <= adequate_max`
    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("adult_weight_ratio_threshold", self.adult_weight_ratio_threshold),
            ("default_daily_gain_grams", self.default_daily_gain_grams),
            ("adequate_min_pct", self.adequate_min_pct),
            ("adequate_max_pct", self.adequate_max_pct),
            ("urgent_below_pct", self.urgent_below_pct),
        ];
        if let Some((name, value)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} is not finite: {}", name, value));
        }

        if self.default_daily_gain_grams <= 0.0 || self.adult_weight_ratio_threshold <= 0.0 {
            return Err(format!(
                "gain ({}) and adult ratio ({}) must be positive",
                self.default_daily_gain_grams, self.adult_weight_ratio_threshold
            ));
        }

        if !(self.urgent_below_pct <= self.adequate_min_pct
            && self.adequate_min_pct <= self.adequate_max_pct)
        {
            return Err(format!(
                "bands out of order: urgent_below_pct={} adequate_min_pct={} adequate_max_pct={}",
                self.urgent_below_pct, self.adequate_min_pct, self.adequate_max_pct
            ));
        }

        Ok(())
    }
}

// ==========================================
// ProjectionConfigReader Trait
// ==========================================
// Implemented by ConfigManager (config_kv table)
pub trait ProjectionConfigReader: Send + Sync {
    /// Projection constants; missing, unparsable or inconsistent values fall back to defaults.
    fn get_projection_rules(&self) -> Result<ProjectionRules, Box<dyn Error>>;

    /// Principals allowed to read every property.
    ///
    /// # Default
    /// - empty list
    fn get_privileged_emails(&self) -> Result<Vec<String>, Box<dyn Error>>;

    /// UI locale for recommendation texts.
    ///
    /// # Default
    /// - "pt-BR"
    fn get_locale(&self) -> Result<String, Box<dyn Error>>;
}
