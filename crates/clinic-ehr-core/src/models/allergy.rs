//! Allergy model.

use serde::{Deserialize, Serialize};

/// A known adverse reaction belonging to one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allergy {
    /// Row id, assigned by the database on insert
    pub id: i64,
    /// Owning patient id
    pub patient_id: i64,
    /// Substance the patient reacts to
    pub allergen: String,
    /// Observed reaction
    pub reaction: Option<String>,
    /// Severity description (e.g. "mild", "anaphylaxis")
    pub severity: Option<String>,
}

/// Field set for inserting an allergy; the database assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAllergy {
    pub patient_id: i64,
    pub allergen: String,
    pub reaction: Option<String>,
    pub severity: Option<String>,
}
