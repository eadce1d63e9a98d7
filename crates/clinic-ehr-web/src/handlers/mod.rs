//! Request handlers, one module per resource.
//!
//! Every handler follows the same shape: lookup, optional mutation, then
//! a redirect to a canonical GET view or a rendered page. Mutations log
//! one info line.

pub mod allergies;
pub mod healthz;
pub mod medications;
pub mod patients;
pub mod visits;

use axum::response::Redirect;

use crate::flash::Notice;

/// Canonical detail-view path for a patient.
pub(crate) fn patient_path(patient_id: i64) -> String {
    format!("/patients/{patient_id}")
}

/// Redirect to a GET view carrying a validation notice.
pub(crate) fn notice_redirect(path: &str, notice: Notice) -> Redirect {
    Redirect::to(&format!("{path}?notice={}", notice.code()))
}
