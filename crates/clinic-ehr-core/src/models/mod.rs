//! Domain models for the clinic EHR demo.

mod allergy;
mod medication;
mod patient;
mod visit;

pub use allergy::*;
pub use medication::*;
pub use patient::*;
pub use visit::*;
