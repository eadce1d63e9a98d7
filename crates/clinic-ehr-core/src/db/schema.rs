//! SQLite schema definition.

/// Complete database schema for the clinic EHR demo.
///
/// Dates are stored as ISO-8601 `YYYY-MM-DD` TEXT, which compares
/// chronologically under SQLite's default collation.
pub const SCHEMA: &str = r#"
-- Enable foreign keys (required for cascade deletes)
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    date_of_birth TEXT,
    sex TEXT,
    phone TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(last_name, first_name);

-- ============================================================================
-- Visits
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    visit_date TEXT,
    reason TEXT,
    notes TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_visits_patient ON visits(patient_id);

-- ============================================================================
-- Medications
-- ============================================================================

CREATE TABLE IF NOT EXISTS medications (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    dosage TEXT,
    frequency TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medications_patient ON medications(patient_id);

-- ============================================================================
-- Allergies
-- ============================================================================

CREATE TABLE IF NOT EXISTS allergies (
    id INTEGER PRIMARY KEY,
    patient_id INTEGER NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
    allergen TEXT NOT NULL,
    reaction TEXT,
    severity TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_allergies_patient ON allergies(patient_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_valid() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.execute_batch(SCHEMA);
        assert!(result.is_ok(), "Schema should be valid SQL: {:?}", result);
    }

    #[test]
    fn test_orphan_child_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        // Visit referencing a missing patient should fail
        let result = conn.execute(
            "INSERT INTO visits (patient_id, reason) VALUES (999, 'checkup')",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_cascade_delete() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        conn.execute(
            "INSERT INTO patients (first_name, last_name) VALUES ('Ada', 'Lovelace')",
            [],
        )
        .unwrap();
        let patient_id = conn.last_insert_rowid();

        conn.execute(
            "INSERT INTO visits (patient_id, reason) VALUES (?1, 'checkup')",
            [patient_id],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO medications (patient_id, name) VALUES (?1, 'aspirin')",
            [patient_id],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO allergies (patient_id, allergen) VALUES (?1, 'latex')",
            [patient_id],
        )
        .unwrap();

        conn.execute("DELETE FROM patients WHERE id = ?1", [patient_id])
            .unwrap();

        for table in ["visits", "medications", "allergies"] {
            let count: i64 = conn
                .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                    row.get(0)
                })
                .unwrap();
            assert_eq!(count, 0, "{} should be empty after cascade", table);
        }
    }
}
