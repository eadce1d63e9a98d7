//! Medication model.

use serde::{Deserialize, Serialize};

/// A prescribed medication belonging to one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Row id, assigned by the database on insert
    pub id: i64,
    /// Owning patient id
    pub patient_id: i64,
    /// Drug name
    pub name: String,
    /// Dose description (e.g. "100mg")
    pub dosage: Option<String>,
    /// Dosing schedule (e.g. "twice daily")
    pub frequency: Option<String>,
}

/// Field set for inserting a medication; the database assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMedication {
    pub patient_id: i64,
    pub name: String,
    pub dosage: Option<String>,
    pub frequency: Option<String>,
}
