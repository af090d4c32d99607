// ==========================================
// Livestock Manager - animal domain model
// ==========================================
// Animal / WeightRecord: persisted records (animal, weight_record tables)
// AnimalProfile: projection input built from them
// ==========================================

use crate::domain::types::Sex;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Notes that mark a weighing as the birth weight.
pub const BIRTH_WEIGHT_NOTES: &[&str] = &["birth weight", "peso ao nascer"];

// ==========================================
// Animal
// ==========================================
// Species comes from the owning herd
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub animal_id: String,
    pub herd_id: String,
    pub tag: String,          // ear tag / identification
    pub name: Option<String>,
    pub breed: String,
    pub sex: Option<Sex>,
    pub birth_date: Option<NaiveDate>,
    pub current_weight_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// WeightRecord - one weighing
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRecord {
    pub record_id: String,
    pub animal_id: String,
    pub weight_kg: f64,
    pub weighed_on: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// WeightEntry / AnimalProfile - projection input
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub weight_kg: f64,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn new(weight_kg: f64, date: NaiveDate) -> Self {
        Self {
            weight_kg,
            date,
            note: None,
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    fn is_tagged_birth_weight(&self) -> bool {
        self.note
            .as_deref()
            .map(|n| {
                let n = n.trim().to_lowercase();
                BIRTH_WEIGHT_NOTES.iter().any(|tag| n == *tag)
            })
            .unwrap_or(false)
    }
}

impl From<&WeightRecord> for WeightEntry {
    fn from(record: &WeightRecord) -> Self {
        Self {
            weight_kg: record.weight_kg,
            date: record.weighed_on,
            note: record.note.clone(),
        }
    }
}

/// Biological profile of one animal. History order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalProfile {
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
    pub weight_history: Vec<WeightEntry>,
    pub current_weight_kg: Option<f64>,
}

impl AnimalProfile {
    pub fn from_records(animal: &Animal, weights: &[WeightRecord]) -> Self {
        Self {
            birth_date: animal.birth_date,
            sex: animal.sex,
            weight_history: weights.iter().map(WeightEntry::from).collect(),
            current_weight_kg: animal.current_weight_kg,
        }
    }

    /// History sorted by date (stable for same-day entries).
    pub fn sorted_history(&self) -> Vec<&WeightEntry> {
        let mut entries: Vec<&WeightEntry> = self.weight_history.iter().collect();
        entries.sort_by_key(|e| e.date);
        entries
    }

    /// Most recent weighing.
    pub fn latest_entry(&self) -> Option<&WeightEntry> {
        self.sorted_history().last().copied()
    }

    /// Explicit current weight, else the most recent weighing.
    pub fn resolved_current_weight(&self) -> Option<f64> {
        self.current_weight_kg
            .or_else(|| self.latest_entry().map(|e| e.weight_kg))
    }

    /// Birth weight proxy: an entry dated on the birth date or tagged as
    /// birth weight, otherwise the earliest entry.
    pub fn birth_weight_entry(&self) -> Option<&WeightEntry> {
        let sorted = self.sorted_history();
        sorted
            .iter()
            .find(|e| Some(e.date) == self.birth_date || e.is_tagged_birth_weight())
            .or_else(|| sorted.first())
            .copied()
    }
}
