// ==========================================
// Livestock Manager - growth projection outputs
// ==========================================
// All records are recomputed on every call and carry no identity.
// ==========================================

use crate::domain::types::{
    DevelopmentStatus, HighlightBandKind, Recommendation, ScheduleEventKind, WindowStatus,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Age of an animal on a given day (30-day months).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalAge {
    pub days: i64,
    pub months: i64,
}

// ==========================================
// DevelopmentAssessment
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentAssessment {
    pub age_days: Option<i64>,
    pub age_months: Option<i64>,
    pub expected_weight_kg: Option<f64>,
    pub current_weight_kg: Option<f64>,
    pub percent_of_expected: Option<f64>,
    pub status: DevelopmentStatus,
    pub recommendation: Option<Recommendation>,
    /// Localised text of `recommendation`
    pub recommendation_text: Option<String>,
}

impl DevelopmentAssessment {
    /// Assessment for an animal that cannot be projected at all.
    pub fn insufficient_data() -> Self {
        Self {
            age_days: None,
            age_months: None,
            expected_weight_kg: None,
            current_weight_kg: None,
            percent_of_expected: None,
            status: DevelopmentStatus::InsufficientData,
            recommendation: None,
            recommendation_text: None,
        }
    }

    /// Deviation from expected weight in percent points (negative = below).
    pub fn deviation_pct(&self) -> Option<f64> {
        self.percent_of_expected.map(|p| p - 100.0)
    }
}

// ==========================================
// ScheduleEvent
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub kind: ScheduleEventKind,
    pub event_date: NaiveDate,
    /// Negative = nominal date passed, still inside the tolerance band
    pub days_remaining: i64,
    pub window_status: WindowStatus,
    /// Rule and inputs that produced the event
    pub reason: String,
}

impl ScheduleEvent {
    /// Sort rank: events inside their window come first.
    pub fn sort_rank(&self) -> u8 {
        if self.window_status == WindowStatus::Current {
            0
        } else {
            self.kind.priority_rank()
        }
    }
}

// ==========================================
// WeightCurvePoint
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightBand {
    pub kind: HighlightBandKind,
    /// Display-only height of the band
    pub magnitude_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightCurvePoint {
    pub age_months: u32,
    pub expected_weight_kg: f64,
    pub observed_weight_kg: Option<f64>,
    pub highlight_bands: Vec<HighlightBand>,
}

impl WeightCurvePoint {
    pub fn has_band(&self, kind: HighlightBandKind) -> bool {
        self.highlight_bands.iter().any(|b| b.kind == kind)
    }
}

// ==========================================
// GrowthProjection - bundle of the three outputs
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub available: bool,
    pub assessment: DevelopmentAssessment,
    pub schedule: Vec<ScheduleEvent>,
    pub curve: Vec<WeightCurvePoint>,
}

impl GrowthProjection {
    /// Result for an animal without a birth date.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            assessment: DevelopmentAssessment::insufficient_data(),
            schedule: Vec::new(),
            curve: Vec::new(),
        }
    }

    /// First event inside its window, if any.
    pub fn current_event(&self) -> Option<&ScheduleEvent> {
        self.schedule
            .iter()
            .find(|e| e.window_status == WindowStatus::Current)
    }
}
