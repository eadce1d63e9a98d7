//! Medication database operations.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbResult};
use crate::models::{Medication, NewMedication};

impl Database {
    /// Insert a new medication, returning the assigned id.
    pub fn insert_medication(&self, medication: &NewMedication) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO medications (patient_id, name, dosage, frequency)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                medication.patient_id,
                medication.name,
                medication.dosage,
                medication.frequency,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a medication by id.
    pub fn get_medication(&self, id: i64) -> DbResult<Option<Medication>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, name, dosage, frequency
                FROM medications
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(Medication {
                        id: row.get(0)?,
                        patient_id: row.get(1)?,
                        name: row.get(2)?,
                        dosage: row.get(3)?,
                        frequency: row.get(4)?,
                    })
                },
            )
            .optional()
            .map_err(Into::into)
    }

    /// List a patient's medications in insertion order.
    pub fn list_medications_for_patient(&self, patient_id: i64) -> DbResult<Vec<Medication>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, name, dosage, frequency
            FROM medications
            WHERE patient_id = ?
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(Medication {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                name: row.get(2)?,
                dosage: row.get(3)?,
                frequency: row.get(4)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a medication.
    pub fn delete_medication(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM medications WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}
