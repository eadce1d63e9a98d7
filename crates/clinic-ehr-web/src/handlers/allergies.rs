//! Allergy sub-resource: add and ownership-checked delete.

use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Form;

use super::{notice_redirect, patient_path};
use crate::error::WebError;
use crate::forms::AllergyForm;
use crate::AppState;

/// `POST /patients/{id}/allergies/new` — add an allergy.
///
/// A blank allergen rejects the submission with a notice; nothing is
/// persisted.
pub async fn add(
    State(state): State<AppState>,
    Path(patient_id): Path<i64>,
    Form(form): Form<AllergyForm>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let allergy = match form.into_new_allergy(patient_id) {
        Ok(allergy) => allergy,
        Err(notice) => return Ok(notice_redirect(&patient_path(patient_id), notice)),
    };
    let id = db.insert_allergy(&allergy)?;
    drop(db);

    tracing::info!(patient_id, allergy_id = id, "allergy added");
    Ok(Redirect::to(&patient_path(patient_id)))
}

/// `POST /patients/{id}/allergies/{aid}/delete` — ownership-checked
/// delete, as for visits.
pub async fn delete(
    State(state): State<AppState>,
    Path((patient_id, allergy_id)): Path<(i64, i64)>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    if db.get_patient(patient_id)?.is_none() {
        return Err(WebError::NotFound);
    }
    let allergy = db.get_allergy(allergy_id)?.ok_or(WebError::NotFound)?;
    if allergy.patient_id != patient_id {
        return Err(WebError::NotFound);
    }
    db.delete_allergy(allergy_id)?;
    drop(db);

    tracing::info!(patient_id, allergy_id, "allergy deleted");
    Ok(Redirect::to(&patient_path(patient_id)))
}
