//! Patient directory, create/edit forms, detail view, cascade delete.

use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use tera::Context;

use clinic_ehr_core::Patient;

use super::{notice_redirect, patient_path};
use crate::error::WebError;
use crate::flash::NoticeQuery;
use crate::forms::PatientForm;
use crate::AppState;

/// `GET /` — all patients, ordered by last name then first name.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let patients = state.db()?.list_patients()?;

    let mut context = Context::new();
    context.insert("patients", &patients);
    Ok(Html(state.templates.render("index.html", &context)?))
}

/// `GET /patients/new` — empty creation form.
pub async fn new_form(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let mut context = Context::new();
    context.insert("patient", &Option::<Patient>::None);
    if let Some(notice) = query.decode() {
        context.insert("notice", notice.message());
    }
    Ok(Html(state.templates.render("patient_form.html", &context)?))
}

/// `POST /patients/new` — create a patient.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<PatientForm>,
) -> Result<Redirect, WebError> {
    let patient = match form.into_new_patient() {
        Ok(patient) => patient,
        Err(notice) => return Ok(notice_redirect("/patients/new", notice)),
    };

    let id = state.db()?.insert_patient(&patient)?;
    tracing::info!(patient_id = id, "patient created");
    Ok(Redirect::to(&patient_path(id)))
}

/// `GET /patients/{id}` — detail view with visits, medications, allergies.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, WebError> {
    let db = state.db()?;
    let patient = db.get_patient(id)?.ok_or(WebError::NotFound)?;
    let visits = db.list_visits_for_patient(id)?;
    let medications = db.list_medications_for_patient(id)?;
    let allergies = db.list_allergies_for_patient(id)?;
    drop(db);

    let mut context = Context::new();
    context.insert("patient", &patient);
    context.insert("visits", &visits);
    context.insert("medications", &medications);
    context.insert("allergies", &allergies);
    if let Some(notice) = query.decode() {
        context.insert("notice", notice.message());
    }
    Ok(Html(
        state.templates.render("patient_detail.html", &context)?,
    ))
}

/// `GET /patients/{id}/edit` — pre-filled edit form.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, WebError> {
    let patient = state.db()?.get_patient(id)?.ok_or(WebError::NotFound)?;

    let mut context = Context::new();
    context.insert("patient", &patient);
    Ok(Html(state.templates.render("patient_form.html", &context)?))
}

/// `POST /patients/{id}/edit` — update with update-if-present semantics.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<PatientForm>,
) -> Result<Redirect, WebError> {
    let db = state.db()?;
    let mut patient = db.get_patient(id)?.ok_or(WebError::NotFound)?;
    form.apply_edit(&mut patient);
    db.update_patient(&patient)?;
    drop(db);

    tracing::info!(patient_id = id, "patient updated");
    Ok(Redirect::to(&patient_path(id)))
}

/// `POST /patients/{id}/delete` — delete the patient; children cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, WebError> {
    if !state.db()?.delete_patient(id)? {
        return Err(WebError::NotFound);
    }
    tracing::info!(patient_id = id, "patient deleted");
    Ok(Redirect::to("/"))
}
