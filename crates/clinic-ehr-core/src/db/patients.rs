//! Patient database operations.

use rusqlite::{params, OptionalExtension};

use super::{stored_date, Database, DbError, DbResult};
use crate::models::{NewPatient, Patient};

impl Database {
    /// Insert a new patient, returning the assigned id.
    pub fn insert_patient(&self, patient: &NewPatient) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO patients (first_name, last_name, date_of_birth, sex, phone)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                patient.first_name,
                patient.last_name,
                patient.date_of_birth.map(|d| d.to_string()),
                patient.sex,
                patient.phone,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Update an existing patient.
    pub fn update_patient(&self, patient: &Patient) -> DbResult<bool> {
        let rows_affected = self.conn.execute(
            r#"
            UPDATE patients SET
                first_name = ?2,
                last_name = ?3,
                date_of_birth = ?4,
                sex = ?5,
                phone = ?6,
                updated_at = datetime('now')
            WHERE id = ?1
            "#,
            params![
                patient.id,
                patient.first_name,
                patient.last_name,
                patient.date_of_birth.map(|d| d.to_string()),
                patient.sex,
                patient.phone,
            ],
        )?;
        Ok(rows_affected > 0)
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: i64) -> DbResult<Option<Patient>> {
        self.conn
            .query_row(
                r#"
                SELECT id, first_name, last_name, date_of_birth, sex, phone
                FROM patients
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(PatientRow {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        date_of_birth: row.get(3)?,
                        sex: row.get(4)?,
                        phone: row.get(5)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List all patients, ordered by last name then first name.
    pub fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, first_name, last_name, date_of_birth, sex, phone
            FROM patients
            ORDER BY last_name, first_name
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PatientRow {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                date_of_birth: row.get(3)?,
                sex: row.get(4)?,
                phone: row.get(5)?,
            })
        })?;

        let mut patients = Vec::new();
        for row in rows {
            patients.push(row?.try_into()?);
        }
        Ok(patients)
    }

    /// Delete a patient; owned visits, medications, and allergies cascade.
    pub fn delete_patient(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM patients WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct PatientRow {
    id: i64,
    first_name: String,
    last_name: String,
    date_of_birth: Option<String>,
    sex: Option<String>,
    phone: Option<String>,
}

impl TryFrom<PatientRow> for Patient {
    type Error = DbError;

    fn try_from(row: PatientRow) -> Result<Self, Self::Error> {
        Ok(Patient {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            date_of_birth: stored_date(row.date_of_birth)?,
            sex: row.sex,
            phone: row.phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn make_patient(first_name: &str, last_name: &str) -> NewPatient {
        NewPatient {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: None,
            sex: None,
            phone: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let db = setup_db();

        let mut patient = make_patient("Ada", "Lovelace");
        patient.date_of_birth = NaiveDate::from_ymd_opt(1815, 12, 10);
        patient.sex = Some("F".into());
        patient.phone = Some("555-0100".into());

        let id = db.insert_patient(&patient).unwrap();

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.first_name, "Ada");
        assert_eq!(retrieved.last_name, "Lovelace");
        assert_eq!(
            retrieved.date_of_birth,
            NaiveDate::from_ymd_opt(1815, 12, 10)
        );
        assert_eq!(retrieved.sex, Some("F".into()));
        assert_eq!(retrieved.phone, Some("555-0100".into()));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let db = setup_db();
        assert!(db.get_patient(42).unwrap().is_none());
    }

    #[test]
    fn test_blank_optionals_stay_absent() {
        let db = setup_db();

        let id = db.insert_patient(&make_patient("Ada", "Lovelace")).unwrap();

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.date_of_birth, None);
        assert_eq!(retrieved.sex, None);
        assert_eq!(retrieved.phone, None);
    }

    #[test]
    fn test_list_ordered_by_last_then_first_name() {
        let db = setup_db();

        db.insert_patient(&make_patient("Ada", "Lovelace")).unwrap();
        db.insert_patient(&make_patient("Marie", "Curie")).unwrap();
        db.insert_patient(&make_patient("Pierre", "Curie")).unwrap();

        let patients = db.list_patients().unwrap();
        let names: Vec<String> = patients.iter().map(|p| p.full_name()).collect();
        assert_eq!(names, vec!["Marie Curie", "Pierre Curie", "Ada Lovelace"]);
    }

    #[test]
    fn test_update_patient() {
        let db = setup_db();

        let id = db.insert_patient(&make_patient("Ada", "Lovelace")).unwrap();
        let mut patient = db.get_patient(id).unwrap().unwrap();

        patient.phone = Some("555-0199".into());
        patient.date_of_birth = NaiveDate::from_ymd_opt(1815, 12, 10);
        assert!(db.update_patient(&patient).unwrap());

        let retrieved = db.get_patient(id).unwrap().unwrap();
        assert_eq!(retrieved.phone, Some("555-0199".into()));
        assert_eq!(
            retrieved.date_of_birth,
            NaiveDate::from_ymd_opt(1815, 12, 10)
        );
    }

    #[test]
    fn test_delete_patient() {
        let db = setup_db();

        let id = db.insert_patient(&make_patient("Ada", "Lovelace")).unwrap();
        assert!(db.delete_patient(id).unwrap());
        assert!(db.get_patient(id).unwrap().is_none());

        // Deleting again reports nothing removed
        assert!(!db.delete_patient(id).unwrap());
    }
}
