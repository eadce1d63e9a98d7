//! Allergy database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Allergy, NewAllergy};

impl Database {
    /// Insert a new allergy, returning the assigned id.
    pub fn insert_allergy(&self, allergy: &NewAllergy) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO allergies (patient_id, allergen, reaction, severity)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                allergy.patient_id,
                allergy.allergen,
                allergy.reaction,
                allergy.severity,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get an allergy by id.
    pub fn get_allergy(&self, id: i64) -> DbResult<Option<Allergy>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, allergen, reaction, severity
                FROM allergies
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(Allergy {
                        id: row.get(0)?,
                        patient_id: row.get(1)?,
                        allergen: row.get(2)?,
                        reaction: row.get(3)?,
                        severity: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List a patient's allergies in insertion order.
    pub fn list_allergies_for_patient(&self, patient_id: i64) -> DbResult<Vec<Allergy>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, allergen, reaction, severity
            FROM allergies
            WHERE patient_id = ?
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Allergy {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                allergen: row.get(2)?,
                reaction: row.get(3)?,
                severity: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete an allergy.
    pub fn delete_allergy(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM allergies WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
