//! Visit model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated clinical encounter belonging to one patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    /// Row id, assigned by the database on insert
    pub id: i64,
    /// Owning patient id
    pub patient_id: i64,
    /// Encounter date, absent when not recorded
    pub visit_date: Option<NaiveDate>,
    /// Short reason for the visit
    pub reason: Option<String>,
    /// Free-text clinical notes
    pub notes: Option<String>,
}

/// Field set for inserting a visit; the database assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewVisit {
    pub patient_id: i64,
    pub visit_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub notes: Option<String>,
}
