//! Visit sub-resource: add and ownership-checked delete.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;

use super::patient_path;
use crate::error::WebError;
use crate::forms::VisitForm;
use crate::AppState;

/// `POST /patients/{id}/visits/new` — add a visit; no required fields.
pub async fn add(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    Form(form): Form<VisitForm>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let id = db.insert_visit(&form.into_new_visit(patient_id))?;
    drop(db);

    tracing::info!(patient_id, visit_id = id, "visit added");
    Ok(Redirect::to(&patient_path(patient_id)))
}

/// `POST /patients/{id}/visits/{vid}/delete`
///
/// The visit must exist and belong to the patient named in the path;
/// any mismatch is not-found, so a guessed id cannot delete across
/// patients.
pub async fn delete(
    State(state): State<AppState>,
    Path((patient_id, visit_id)): Path<(i64, i64)>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let visit = db.get_visit(visit_id)?.ok_or(WebError::NotFound)?;
    if visit.patient_id != patient_id {
        return Err(WebError::NotFound);
    }
    db.delete_visit(visit_id)?;
    drop(db);

    tracing::info!(patient_id, visit_id, "visit deleted");
    Ok(Redirect::to(&patient_path(patient_id)))
}
