// ==========================================
// Livestock Manager - breed reference repository
// ==========================================
// Table: breed_reference, key (animal_type, breed)
// Data access only, no business rules
// ==========================================

use crate::domain::breed::BreedReference;
use crate::domain::types::AnimalType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

const BREED_COLUMNS: &str = r#"
    animal_type, breed,
    birth_weight_kg, weight_at_10_months_kg, adult_weight_male_kg, adult_weight_female_kg,
    sexual_maturity_months,
    early_slaughter_days, conventional_slaughter_days,
    late_slaughter_days_min, late_slaughter_days_max,
    daily_weight_gain_grams
"#;

// ==========================================
// BreedReferenceRepository
// ==========================================
pub struct BreedReferenceRepository {
    conn: Arc<Mutex<Connection>>,
}

impl BreedReferenceRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = crate::db::open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Inserts or replaces the characteristics of one breed.
    pub fn upsert(&self, reference: &BreedReference) -> RepositoryResult<()> {
        let animal_type = reference.animal_type.ok_or_else(|| {
            RepositoryError::ValidationError(format!(
                "breed '{}' has no animal_type",
                reference.breed
            ))
        })?;
        if let Some((min, max)) = reference.late_slaughter_range() {
            if min > max {
                return Err(RepositoryError::FieldValueError {
                    field: "late_slaughter_days_min".to_string(),
                    message: format!("min={} exceeds max={}", min, max),
                });
            }
        }

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO breed_reference (
                animal_type, breed,
                birth_weight_kg, weight_at_10_months_kg,
                adult_weight_male_kg, adult_weight_female_kg,
                sexual_maturity_months,
                early_slaughter_days, conventional_slaughter_days,
                late_slaughter_days_min, late_slaughter_days_max,
                daily_weight_gain_grams
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            ON CONFLICT(animal_type, breed) DO UPDATE SET
                birth_weight_kg = excluded.birth_weight_kg,
                weight_at_10_months_kg = excluded.weight_at_10_months_kg,
                adult_weight_male_kg = excluded.adult_weight_male_kg,
                adult_weight_female_kg = excluded.adult_weight_female_kg,
                sexual_maturity_months = excluded.sexual_maturity_months,
                early_slaughter_days = excluded.early_slaughter_days,
                conventional_slaughter_days = excluded.conventional_slaughter_days,
                late_slaughter_days_min = excluded.late_slaughter_days_min,
                late_slaughter_days_max = excluded.late_slaughter_days_max,
                daily_weight_gain_grams = excluded.daily_weight_gain_grams
            "#,
            params![
                animal_type.to_db_str(),
                reference.breed.trim(),
                reference.birth_weight_kg,
                reference.weight_at_10_months_kg,
                reference.adult_weight_male_kg,
                reference.adult_weight_female_kg,
                reference.sexual_maturity_months,
                reference.early_slaughter_days,
                reference.conventional_slaughter_days,
                reference.late_slaughter_days_min,
                reference.late_slaughter_days_max,
                reference.daily_weight_gain_grams,
            ],
        )?;
        Ok(())
    }

    /// Looks up a breed; the breed name match ignores case.
    pub fn find(
        &self,
        animal_type: AnimalType,
        breed: &str,
    ) -> RepositoryResult<Option<BreedReference>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM breed_reference WHERE animal_type = ?1 AND lower(breed) = lower(?2)",
            BREED_COLUMNS
        );
        let result = conn
            .query_row(&sql, params![animal_type.to_db_str(), breed.trim()], map_breed_row)
            .optional()?;
        Ok(result)
    }

    pub fn list_by_type(&self, animal_type: AnimalType) -> RepositoryResult<Vec<BreedReference>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM breed_reference WHERE animal_type = ?1 ORDER BY breed",
            BREED_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![animal_type.to_db_str()], map_breed_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn map_breed_row(row: &Row<'_>) -> rusqlite::Result<BreedReference> {
    Ok(BreedReference {
        animal_type: AnimalType::from_db_str(&row.get::<_, String>(0)?),
        breed: row.get(1)?,
        birth_weight_kg: row.get(2)?,
        weight_at_10_months_kg: row.get(3)?,
        adult_weight_male_kg: row.get(4)?,
        adult_weight_female_kg: row.get(5)?,
        sexual_maturity_months: row.get(6)?,
        early_slaughter_days: row.get(7)?,
        conventional_slaughter_days: row.get(8)?,
        late_slaughter_days_min: row.get(9)?,
        late_slaughter_days_max: row.get(10)?,
        daily_weight_gain_grams: row.get(11)?,
    })
}
