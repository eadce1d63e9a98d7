//! Patient model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient on the clinic's books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Row id, assigned by the database on insert
    pub id: i64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth, absent when never provided
    pub date_of_birth: Option<NaiveDate>,
    /// Free-form sex designation
    pub sex: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
}

/// Field set for inserting a patient; the database assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub sex: Option<String>,
    pub phone: Option<String>,
}

impl Patient {
    /// Display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
