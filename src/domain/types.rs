// ==========================================
// Livestock Manager - domain enums
// ==========================================
// Stored values use SCREAMING_SNAKE_CASE (same as the database)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Sex
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "MALE"),
            Sex::Female => write!(f, "FEMALE"),
        }
    }
}

impl Sex {
    /// Parses the stored value; also accepts the Portuguese form labels.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "MALE" | "M" | "MACHO" => Some(Sex::Male),
            "FEMALE" | "F" | "FEMEA" | "FÊMEA" => Some(Sex::Female),
            _ => None,
        }
    }
}

// ==========================================
// AnimalType - herd species
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimalType {
    Bovine,
    Buffalo,
    Ovine,
    Caprine,
    Swine,
    Equine,
}

impl fmt::Display for AnimalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl AnimalType {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AnimalType::Bovine => "BOVINE",
            AnimalType::Buffalo => "BUFFALO",
            AnimalType::Ovine => "OVINE",
            AnimalType::Caprine => "CAPRINE",
            AnimalType::Swine => "SWINE",
            AnimalType::Equine => "EQUINE",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "BOVINE" | "BOVINO" => Some(AnimalType::Bovine),
            "BUFFALO" | "BUBALINO" => Some(AnimalType::Buffalo),
            "OVINE" | "OVINO" => Some(AnimalType::Ovine),
            "CAPRINE" | "CAPRINO" => Some(AnimalType::Caprine),
            "SWINE" | "SUINO" | "SUÍNO" => Some(AnimalType::Swine),
            "EQUINE" | "EQUINO" => Some(AnimalType::Equine),
            _ => None,
        }
    }
}

// ==========================================
// DevelopmentStatus - weight-for-age classification
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DevelopmentStatus {
    AdequateDevelopment,
    BelowExpected,
    AboveExpected,
    InsufficientData,
}

impl fmt::Display for DevelopmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevelopmentStatus::AdequateDevelopment => write!(f, "ADEQUATE_DEVELOPMENT"),
            DevelopmentStatus::BelowExpected => write!(f, "BELOW_EXPECTED"),
            DevelopmentStatus::AboveExpected => write!(f, "ABOVE_EXPECTED"),
            DevelopmentStatus::InsufficientData => write!(f, "INSUFFICIENT_DATA"),
        }
    }
}

impl DevelopmentStatus {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DevelopmentStatus::AdequateDevelopment => "status.adequate_development",
            DevelopmentStatus::BelowExpected => "status.below_expected",
            DevelopmentStatus::AboveExpected => "status.above_expected",
            DevelopmentStatus::InsufficientData => "status.insufficient_data",
        }
    }
}

// ==========================================
// Recommendation - advice keyed off the status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    MaintainManagement,
    IncreaseSupplementation,
    UrgentHealthAssessment,
    ContinueMonitoring,
}

impl Recommendation {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Recommendation::MaintainManagement => "recommendation.maintain_management",
            Recommendation::IncreaseSupplementation => "recommendation.increase_supplementation",
            Recommendation::UrgentHealthAssessment => "recommendation.urgent_health_assessment",
            Recommendation::ContinueMonitoring => "recommendation.continue_monitoring",
        }
    }
}

// ==========================================
// ScheduleEventKind - life-stage / slaughter-window rules
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleEventKind {
    Weaning,
    SexualMaturity,
    EarlySlaughterWindow,
    ConventionalSlaughterWindow,
    LateSlaughterWindow,
    FirstBreeding,
    AdultWeightReached,
}

impl fmt::Display for ScheduleEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleEventKind::Weaning => write!(f, "WEANING"),
            ScheduleEventKind::SexualMaturity => write!(f, "SEXUAL_MATURITY"),
            ScheduleEventKind::EarlySlaughterWindow => write!(f, "EARLY_SLAUGHTER_WINDOW"),
            ScheduleEventKind::ConventionalSlaughterWindow => {
                write!(f, "CONVENTIONAL_SLAUGHTER_WINDOW")
            }
            ScheduleEventKind::LateSlaughterWindow => write!(f, "LATE_SLAUGHTER_WINDOW"),
            ScheduleEventKind::FirstBreeding => write!(f, "FIRST_BREEDING"),
            ScheduleEventKind::AdultWeightReached => write!(f, "ADULT_WEIGHT_REACHED"),
        }
    }
}

impl ScheduleEventKind {
    /// Fixed sort rank; events inside their window override this with 0.
    pub fn priority_rank(&self) -> u8 {
        match self {
            ScheduleEventKind::Weaning => 1,
            ScheduleEventKind::SexualMaturity => 2,
            ScheduleEventKind::EarlySlaughterWindow => 3,
            ScheduleEventKind::ConventionalSlaughterWindow => 4,
            ScheduleEventKind::LateSlaughterWindow => 5,
            ScheduleEventKind::FirstBreeding => 6,
            ScheduleEventKind::AdultWeightReached => 7,
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ScheduleEventKind::Weaning => "event.weaning",
            ScheduleEventKind::SexualMaturity => "event.sexual_maturity",
            ScheduleEventKind::EarlySlaughterWindow => "event.early_slaughter_window",
            ScheduleEventKind::ConventionalSlaughterWindow => "event.conventional_slaughter_window",
            ScheduleEventKind::LateSlaughterWindow => "event.late_slaughter_window",
            ScheduleEventKind::FirstBreeding => "event.first_breeding",
            ScheduleEventKind::AdultWeightReached => "event.adult_weight_reached",
        }
    }
}

// ==========================================
// WindowStatus
// ==========================================
// Past events never leave the schedule builder; the variant exists for
// callers that classify a date themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowStatus {
    Upcoming,
    Current,
    Past,
}

impl fmt::Display for WindowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowStatus::Upcoming => write!(f, "UPCOMING"),
            WindowStatus::Current => write!(f, "CURRENT"),
            WindowStatus::Past => write!(f, "PAST"),
        }
    }
}

// ==========================================
// HighlightBandKind - chart bands on the weight curve
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighlightBandKind {
    InitialGrowth,
    SexualMaturityWindow,
    EarlySlaughterWindow,
    ConventionalSlaughterWindow,
    LateSlaughterWindow,
}

impl fmt::Display for HighlightBandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighlightBandKind::InitialGrowth => write!(f, "INITIAL_GROWTH"),
            HighlightBandKind::SexualMaturityWindow => write!(f, "SEXUAL_MATURITY_WINDOW"),
            HighlightBandKind::EarlySlaughterWindow => write!(f, "EARLY_SLAUGHTER_WINDOW"),
            HighlightBandKind::ConventionalSlaughterWindow => {
                write!(f, "CONVENTIONAL_SLAUGHTER_WINDOW")
            }
            HighlightBandKind::LateSlaughterWindow => write!(f, "LATE_SLAUGHTER_WINDOW"),
        }
    }
}
