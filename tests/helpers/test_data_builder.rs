// ==========================================
// Test data builders
// ==========================================

use chrono::{NaiveDate, Utc};
use livestock_manager::domain::animal::{Animal, WeightRecord};
use livestock_manager::domain::breed::BreedReference;
use livestock_manager::domain::property::{Herd, Property};
use livestock_manager::domain::types::{AnimalType, Sex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

// ==========================================
// Property / Herd
// ==========================================

pub fn property(property_id: &str, owner_email: &str) -> Property {
    Property {
        property_id: property_id.to_string(),
        owner_email: owner_email.to_string(),
        name: format!("Fazenda {}", property_id),
        city: Some("Uberaba".to_string()),
        state: Some("MG".to_string()),
        area_hectares: Some(420.0),
        created_at: Utc::now(),
    }
}

pub fn herd(herd_id: &str, property_id: &str, animal_type: AnimalType) -> Herd {
    Herd {
        herd_id: herd_id.to_string(),
        property_id: property_id.to_string(),
        name: format!("Lote {}", herd_id),
        animal_type,
        created_at: Utc::now(),
    }
}

// ==========================================
// Animal builder
// ==========================================

pub struct AnimalBuilder {
    animal_id: String,
    herd_id: String,
    tag: String,
    name: Option<String>,
    breed: String,
    sex: Option<Sex>,
    birth_date: Option<NaiveDate>,
    current_weight_kg: Option<f64>,
}

impl AnimalBuilder {
    pub fn new(animal_id: &str, herd_id: &str) -> Self {
        Self {
            animal_id: animal_id.to_string(),
            herd_id: herd_id.to_string(),
            tag: format!("BR-{}", animal_id),
            name: None,
            breed: "Nelore".to_string(),
            sex: None,
            birth_date: None,
            current_weight_kg: None,
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn breed(mut self, breed: &str) -> Self {
        self.breed = breed.to_string();
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn born(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    pub fn current_weight(mut self, kg: f64) -> Self {
        self.current_weight_kg = Some(kg);
        self
    }

    pub fn build(self) -> Animal {
        let now = Utc::now();
        Animal {
            animal_id: self.animal_id,
            herd_id: self.herd_id,
            tag: self.tag,
            name: self.name,
            breed: self.breed,
            sex: self.sex,
            birth_date: self.birth_date,
            current_weight_kg: self.current_weight_kg,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn weighing(record_id: &str, animal_id: &str, weight_kg: f64, on: NaiveDate) -> WeightRecord {
    WeightRecord {
        record_id: record_id.to_string(),
        animal_id: animal_id.to_string(),
        weight_kg,
        weighed_on: on,
        note: None,
        created_at: Utc::now(),
    }
}

// ==========================================
// BreedReference fixtures
// ==========================================

/// Nelore-like reference with every field filled.
pub fn nelore() -> BreedReference {
    BreedReference {
        animal_type: Some(AnimalType::Bovine),
        breed: "Nelore".to_string(),
        birth_weight_kg: Some(30.0),
        weight_at_10_months_kg: Some(200.0),
        adult_weight_male_kg: Some(550.0),
        adult_weight_female_kg: Some(400.0),
        sexual_maturity_months: Some(12),
        early_slaughter_days: Some(90),
        conventional_slaughter_days: Some(300),
        late_slaughter_days_min: Some(400),
        late_slaughter_days_max: Some(500),
        daily_weight_gain_grams: Some(500.0),
    }
}

/// Reference with only the weight points.
pub fn weights_only(animal_type: AnimalType, breed: &str) -> BreedReference {
    BreedReference {
        animal_type: Some(animal_type),
        breed: breed.to_string(),
        birth_weight_kg: Some(4.0),
        weight_at_10_months_kg: Some(40.0),
        adult_weight_male_kg: Some(80.0),
        adult_weight_female_kg: Some(60.0),
        ..BreedReference::default()
    }
}
