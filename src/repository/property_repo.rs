// ==========================================
// Livestock Manager - property and herd repository
// ==========================================
// Tables: property, herd
// Data access only, no business rules
// ==========================================

use crate::db::parse_db_timestamp;
use crate::domain::property::{Herd, Property};
use crate::domain::types::AnimalType;
use crate::repository::error::{field_error, RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};

// ==========================================
// PropertyRepository
// ==========================================
pub struct PropertyRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PropertyRepository {
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

    // ==========================================
    // property
    // ==========================================

    pub fn create_property(&self, property: &Property) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO property (
                property_id, owner_email, name, city, state, area_hectares, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                property.property_id,
                property.owner_email.trim().to_lowercase(),
                property.name,
                property.city,
                property.state,
                property.area_hectares,
                property.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// # Returns
    /// - Ok(Some(Property)): found
    /// - Ok(None): no such property
    pub fn find_property(&self, property_id: &str) -> RepositoryResult<Option<Property>> {
        let conn = self.get_conn()?;
        let result = conn
            .query_row(
                r#"
                SELECT property_id, owner_email, name, city, state, area_hectares, created_at
                FROM property
                WHERE property_id = ?1
                "#,
                params![property_id],
                map_property_row,
            )
            .optional()?;
        Ok(result)
    }

    pub fn list_properties_by_owner(&self, owner_email: &str) -> RepositoryResult<Vec<Property>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT property_id, owner_email, name, city, state, area_hectares, created_at
            FROM property
            WHERE owner_email = ?1
            ORDER BY name
            "#,
        )?;
        let rows = stmt.query_map(params![owner_email.trim().to_lowercase()], map_property_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ==========================================
    // herd
    // ==========================================

    pub fn create_herd(&self, herd: &Herd) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO herd (herd_id, property_id, name, animal_type, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                herd.herd_id,
                herd.property_id,
                herd.name,
                herd.animal_type.to_db_str(),
                herd.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn find_herd(&self, herd_id: &str) -> RepositoryResult<Option<Herd>> {
        let conn = self.get_conn()?;
        let raw = conn
            .query_row(
                r#"
                SELECT herd_id, property_id, name, animal_type, created_at
                FROM herd
                WHERE herd_id = ?1
                "#,
                params![herd_id],
                map_herd_row,
            )
            .optional()?;
        raw.map(herd_from_raw).transpose()
    }

    pub fn list_herds_by_property(&self, property_id: &str) -> RepositoryResult<Vec<Herd>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT herd_id, property_id, name, animal_type, created_at
            FROM herd
            WHERE property_id = ?1
            ORDER BY name
            "#,
        )?;
        let rows = stmt
            .query_map(params![property_id], map_herd_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(herd_from_raw).collect()
    }
}

// ==========================================
// Row mapping
// ==========================================

fn map_property_row(row: &Row<'_>) -> rusqlite::Result<Property> {
    Ok(Property {
        property_id: row.get(0)?,
        owner_email: row.get(1)?,
        name: row.get(2)?,
        city: row.get(3)?,
        state: row.get(4)?,
        area_hectares: row.get(5)?,
        created_at: parse_db_timestamp(&row.get::<_, String>(6)?).unwrap_or_else(Utc::now),
    })
}

struct HerdRow {
    herd_id: String,
    property_id: String,
    name: String,
    animal_type: String,
    created_at: String,
}

fn map_herd_row(row: &Row<'_>) -> rusqlite::Result<HerdRow> {
    Ok(HerdRow {
        herd_id: row.get(0)?,
        property_id: row.get(1)?,
        name: row.get(2)?,
        animal_type: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn herd_from_raw(raw: HerdRow) -> RepositoryResult<Herd> {
    let animal_type = AnimalType::from_db_str(&raw.animal_type)
        .ok_or_else(|| field_error("herd.animal_type", &raw.animal_type))?;
    Ok(Herd {
        herd_id: raw.herd_id,
        property_id: raw.property_id,
        name: raw.name,
        animal_type,
        created_at: parse_db_timestamp(&raw.created_at).unwrap_or_else(Utc::now),
    })
}
