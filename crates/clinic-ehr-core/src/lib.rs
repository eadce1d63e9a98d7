//! Clinic EHR Core Library
//!
//! Storage layer for a single-clinic electronic health record demo.
//!
//! # Architecture
//!
//! ```text
//! Browser form POST
//!        │
//!        ▼
//! Handler (clinic-ehr-web) ── validate / normalize fields
//!        │
//!        ▼
//! Database (this crate) ── one SQLite mutation, committed per request
//!        │
//!        ▼
//! Redirect to canonical GET view ── re-reads the store for display
//! ```
//!
//! A `Patient` owns three kinds of child records: `Visit`, `Medication`,
//! and `Allergy`. Deleting a patient cascades to all of them at the schema
//! level. Children never exist without an owning patient.
//!
//! # Modules
//!
//! - [`db`]: SQLite database layer, one file of operations per entity
//! - [`models`]: Domain types (Patient, Visit, Medication, Allergy)
//! - [`dates`]: Lenient ISO date parsing for form input

pub mod dates;
pub mod db;
pub mod models;

// Re-export commonly used types
pub use db::Database;
pub use models::{
    Allergy, Medication, NewAllergy, NewMedication, NewPatient, NewVisit, Patient, Visit,
};
