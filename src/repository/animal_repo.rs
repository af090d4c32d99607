// ==========================================
// Livestock Manager - animal and weighing repository
// ==========================================
// Tables: animal, weight_record
// Data access only, no business rules
// ==========================================

use crate::db::{parse_db_date, parse_db_timestamp};
use crate::domain::animal::{Animal, WeightRecord};
use crate::domain::types::Sex;
use crate::repository::error::{field_error, RepositoryError, RepositoryResult};
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

const ANIMAL_COLUMNS: &str = r#"
    animal_id, herd_id, tag, name, breed, sex, birth_date,
    current_weight_kg, created_at, updated_at
"#;

// ==========================================
// AnimalRepository
// ==========================================
pub struct AnimalRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AnimalRepository {
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

    pub fn create(&self, animal: &Animal) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO animal (
                animal_id, herd_id, tag, name, breed, sex, birth_date,
                current_weight_kg, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                animal.animal_id,
                animal.herd_id,
                animal.tag,
                animal.name,
                animal.breed,
                animal.sex.map(|s| s.to_string()),
                animal.birth_date.map(|d| d.to_string()),
                animal.current_weight_kg,
                animal.created_at.to_rfc3339(),
                animal.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, animal_id: &str) -> RepositoryResult<Option<Animal>> {
        let conn = self.get_conn()?;
        let sql = format!("SELECT {} FROM animal WHERE animal_id = ?1", ANIMAL_COLUMNS);
        let raw = conn
            .query_row(&sql, params![animal_id], map_animal_row)
            .optional()?;
        raw.map(animal_from_raw).transpose()
    }

    /// Animals of a herd, ordered by tag.
    pub fn list_by_herd(&self, herd_id: &str) -> RepositoryResult<Vec<Animal>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM animal WHERE herd_id = ?1 ORDER BY tag",
            ANIMAL_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![herd_id], map_animal_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(animal_from_raw).collect()
    }

    /// Sets the cached current weight.
    pub fn update_current_weight(&self, animal_id: &str, weight_kg: f64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "UPDATE animal SET current_weight_kg = ?1, updated_at = ?2 WHERE animal_id = ?3",
            params![weight_kg, Utc::now().to_rfc3339(), animal_id],
        )?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Animal".to_string(),
                id: animal_id.to_string(),
            });
        }
        Ok(())
    }
}

// ==========================================
// WeightRecordRepository
// ==========================================
pub struct WeightRecordRepository {
    conn: Arc<Mutex<Connection>>,
}

impl WeightRecordRepository {
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

    pub fn insert(&self, record: &WeightRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO weight_record (
                record_id, animal_id, weight_kg, weighed_on, note, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                record.record_id,
                record.animal_id,
                record.weight_kg,
                record.weighed_on.to_string(),
                record.note,
                record.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Weighings of one animal, oldest first.
    pub fn list_by_animal(&self, animal_id: &str) -> RepositoryResult<Vec<WeightRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT record_id, animal_id, weight_kg, weighed_on, note, created_at
            FROM weight_record
            WHERE animal_id = ?1
            ORDER BY weighed_on, created_at
            "#,
        )?;
        let rows = stmt
            .query_map(params![animal_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, Option<String>>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(weight_record_from_raw).collect()
    }
}

// ==========================================
// Row mapping
// ==========================================

struct AnimalRow {
    animal_id: String,
    herd_id: String,
    tag: String,
    name: Option<String>,
    breed: String,
    sex: Option<String>,
    birth_date: Option<String>,
    current_weight_kg: Option<f64>,
    created_at: String,
    updated_at: String,
}

type WeightRow = (String, String, f64, String, Option<String>, String);

fn weight_record_from_raw(raw: WeightRow) -> RepositoryResult<WeightRecord> {
    let (record_id, animal_id, weight_kg, raw_date, note, created_at) = raw;
    let weighed_on: NaiveDate = parse_db_date(&raw_date)
        .ok_or_else(|| field_error("weight_record.weighed_on", &raw_date))?;
    Ok(WeightRecord {
        record_id,
        animal_id,
        weight_kg,
        weighed_on,
        note,
        created_at: parse_db_timestamp(&created_at).unwrap_or_else(Utc::now),
    })
}

fn map_animal_row(row: &Row<'_>) -> rusqlite::Result<AnimalRow> {
    Ok(AnimalRow {
        animal_id: row.get(0)?,
        herd_id: row.get(1)?,
        tag: row.get(2)?,
        name: row.get(3)?,
        breed: row.get(4)?,
        sex: row.get(5)?,
        birth_date: row.get(6)?,
        current_weight_kg: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn animal_from_raw(raw: AnimalRow) -> RepositoryResult<Animal> {
    // blank sex is "not informed"; anything else must parse
    let sex = match raw.sex.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(Sex::from_db_str(s).ok_or_else(|| field_error("animal.sex", s))?),
    };
    let birth_date = match raw.birth_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(parse_db_date(s).ok_or_else(|| field_error("animal.birth_date", s))?),
    };

    Ok(Animal {
        animal_id: raw.animal_id,
        herd_id: raw.herd_id,
        tag: raw.tag,
        name: raw.name,
        breed: raw.breed,
        sex,
        birth_date,
        current_weight_kg: raw.current_weight_kg,
        created_at: parse_db_timestamp(&raw.created_at).unwrap_or_else(Utc::now),
        updated_at: parse_db_timestamp(&raw.updated_at).unwrap_or_else(Utc::now),
    })
}
