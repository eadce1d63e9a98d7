//! Medication sub-resource: add and ownership-checked delete.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;

use super::{notice_redirect, patient_path};
use crate::error::WebError;
use crate::forms::MedicationForm;
use crate::AppState;

/// `POST /patients/{id}/medications/new` — add a medication.
///
/// A blank name rejects the submission with a notice; nothing is
/// persisted.
pub async fn add(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    Form(form): Form<MedicationForm>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let medication = match form.into_new_medication(patient_id) {
        Ok(medication) => medication,
        Err(notice) => return Ok(notice_redirect(&patient_path(patient_id), notice)),
    };
    let id = db.insert_medication(&medication)?;
    drop(db);

    tracing::info!(patient_id, medication_id = id, "medication added");
    Ok(Redirect::to(&patient_path(patient_id)))
}

/// `POST /patients/{id}/medications/{mid}/delete` — ownership-checked
/// delete, as for visits.
pub async fn delete(
    State(state): State<AppState>,
    Path((patient_id, medication_id)): Path<(i64, i64)>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let medication = db.get_medication(medication_id)?.ok_or(WebError::NotFound)?;
    if medication.patient_id != patient_id {
        return Err(WebError::NotFound);
    }
    db.delete_medication(medication_id)?;
    drop(db);

    tracing::info!(patient_id, medication_id, "medication deleted");
    Ok(Redirect::to(&patient_path(patient_id)))
}
