// ==========================================
// Livestock Manager - property and herd model
// ==========================================
// Property: rural property owned by one user (owner_email)
// Herd: group of animals of one species on a property
// ==========================================

use crate::domain::types::AnimalType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub property_id: String,
    pub owner_email: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub area_hectares: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email.trim().eq_ignore_ascii_case(email.trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Herd {
    pub herd_id: String,
    pub property_id: String,
    pub name: String,
    pub animal_type: AnimalType,
    pub created_at: DateTime<Utc>,
}
