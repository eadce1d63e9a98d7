//! Visit database operations.

use rusqlite::{params, OptionalExtension};

use super::{stored_date, Database, DbError, DbResult};
use crate::models::{NewVisit, Visit};

impl Database {
    /// Insert a new visit, returning the assigned id.
    pub fn insert_visit(&self, visit: &NewVisit) -> DbResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO visits (patient_id, visit_date, reason, notes)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                visit.patient_id,
                visit.visit_date.map(|d| d.to_string()),
                visit.reason,
                visit.notes,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a visit by id.
    pub fn get_visit(&self, id: i64) -> DbResult<Option<Visit>> {
        self.conn
            .query_row(
                r#"
                SELECT id, patient_id, visit_date, reason, notes
                FROM visits
                WHERE id = ?
                "#,
                [id],
                |row| {
                    Ok(VisitRow {
                        id: row.get(0)?,
                        patient_id: row.get(1)?,
                        visit_date: row.get(2)?,
                        reason: row.get(3)?,
                        notes: row.get(4)?,
                    })
                },
            )
            .optional()?
            .map(|row| row.try_into())
            .transpose()
    }

    /// List a patient's visits, most recent first.
    ///
    /// NULL sorts below every date in SQLite, so undated visits always
    /// land after the dated ones.
    pub fn list_visits_for_patient(&self, patient_id: i64) -> DbResult<Vec<Visit>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, patient_id, visit_date, reason, notes
            FROM visits
            WHERE patient_id = ?
            ORDER BY visit_date DESC, id
            "#,
        )?;

        let rows = stmt.query_map([patient_id], |row| {
            Ok(VisitRow {
                id: row.get(0)?,
                patient_id: row.get(1)?,
                visit_date: row.get(2)?,
                reason: row.get(3)?,
                notes: row.get(4)?,
            })
        })?;

        let mut visits = Vec::new();
        for row in rows {
            visits.push(row?.try_into()?);
        }
        Ok(visits)
    }

    /// Delete a visit.
    pub fn delete_visit(&self, id: i64) -> DbResult<bool> {
        let rows_affected = self.conn.execute("DELETE FROM visits WHERE id = ?", [id])?;
        Ok(rows_affected > 0)
    }
}

/// Intermediate row struct for database mapping.
struct VisitRow {
    id: i64,
    patient_id: i64,
    visit_date: Option<String>,
    reason: Option<String>,
    notes: Option<String>,
}

impl TryFrom<VisitRow> for Visit {
    type Error = DbError;

    fn try_from(row: VisitRow) -> Result<Self, Self::Error> {
        Ok(Visit {
            id: row.id,
            patient_id: row.patient_id,
            visit_date: stored_date(row.visit_date)?,
            reason: row.reason,
            notes: row.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPatient;
    use chrono::NaiveDate;

    fn setup_db_with_patient() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let patient_id = db
            .insert_patient(&NewPatient {
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                date_of_birth: None,
                sex: None,
                phone: None,
            })
            .unwrap();
        (db, patient_id)
    }

    fn make_visit(patient_id: i64, visit_date: Option<NaiveDate>) -> NewVisit {
        NewVisit {
            patient_id,
            visit_date,
            reason: Some("checkup".into()),
            notes: None,
        }
    }

    #[test]
    fn test_insert_and_get() {
        let (db, patient_id) = setup_db_with_patient();

        let visit = NewVisit {
            patient_id,
            visit_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            reason: Some("annual physical".into()),
            notes: Some("all clear".into()),
        };
        let id = db.insert_visit(&visit).unwrap();

        let retrieved = db.get_visit(id).unwrap().unwrap();
        assert_eq!(retrieved.patient_id, patient_id);
        assert_eq!(retrieved.visit_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(retrieved.reason, Some("annual physical".into()));
        assert_eq!(retrieved.notes, Some("all clear".into()));
    }

    #[test]
    fn test_list_most_recent_first() {
        let (db, patient_id) = setup_db_with_patient();

        let older = db
            .insert_visit(&make_visit(patient_id, NaiveDate::from_ymd_opt(2023, 1, 5)))
            .unwrap();
        let newer = db
            .insert_visit(&make_visit(patient_id, NaiveDate::from_ymd_opt(2024, 6, 9)))
            .unwrap();
        let middle = db
            .insert_visit(&make_visit(patient_id, NaiveDate::from_ymd_opt(2023, 11, 20)))
            .unwrap();

        let visits = db.list_visits_for_patient(patient_id).unwrap();
        let ids: Vec<i64> = visits.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![newer, middle, older]);
    }

    #[test]
    fn test_undated_visits_sort_last() {
        let (db, patient_id) = setup_db_with_patient();

        let undated_first = db.insert_visit(&make_visit(patient_id, None)).unwrap();
        let dated = db
            .insert_visit(&make_visit(patient_id, NaiveDate::from_ymd_opt(2024, 1, 1)))
            .unwrap();
        let undated_second = db.insert_visit(&make_visit(patient_id, None)).unwrap();

        let visits = db.list_visits_for_patient(patient_id).unwrap();
        let ids: Vec<i64> = visits.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![dated, undated_first, undated_second]);
    }

    #[test]
    fn test_list_only_owned_visits() {
        let (db, patient_id) = setup_db_with_patient();
        let other_id = db
            .insert_patient(&NewPatient {
                first_name: "Marie".into(),
                last_name: "Curie".into(),
                date_of_birth: None,
                sex: None,
                phone: None,
            })
            .unwrap();

        db.insert_visit(&make_visit(patient_id, None)).unwrap();
        db.insert_visit(&make_visit(other_id, None)).unwrap();

        let visits = db.list_visits_for_patient(patient_id).unwrap();
        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].patient_id, patient_id);
    }

    #[test]
    fn test_delete_visit() {
        let (db, patient_id) = setup_db_with_patient();

        let id = db.insert_visit(&make_visit(patient_id, None)).unwrap();
        assert!(db.delete_visit(id).unwrap());
        assert!(db.get_visit(id).unwrap().is_none());
        assert!(!db.delete_visit(id).unwrap());
    }
}
