//! Clinic EHR Web Server
//!
//! HTTP layer for the single-clinic EHR demo: an axum router over
//! server-rendered HTML forms. Every mutation is a form POST that commits
//! one change and answers with a redirect to a canonical GET view; the GET
//! view re-reads the store for display.
//!
//! # Modules
//!
//! - [`handlers`]: One handler per route (patients, visits, medications,
//!   allergies, liveness)
//! - [`forms`]: Form payload normalization (trim, required fields, blank
//!   optional → absent)
//! - [`flash`]: Validation notices carried across redirects
//! - [`templates`]: Inline tera templates for the four pages
//! - [`config`]: Listening port and database path
//! - [`error`]: Web-facing error type

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod templates;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    routing::{get, post},
    Router,
};
use tera::Tera;
use tower_http::trace::TraceLayer;

use clinic_ehr_core::Database;

use crate::error::WebError;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Database>>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db: Database) -> Result<Self, tera::Error> {
        Ok(Self {
            db: Arc::new(Mutex::new(db)),
            templates: Arc::new(templates::build_templates()?),
        })
    }

    /// Lock the database for the duration of one request.
    ///
    /// Handlers hold the guard across their whole read-or-mutate sequence
    /// and never await while holding it, so requests are processed one at
    /// a time.
    pub(crate) fn db(&self) -> Result<MutexGuard<'_, Database>, WebError> {
        self.db.lock().map_err(|_| WebError::LockPoisoned)
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::patients::index))
        .route(
            "/patients/new",
            get(handlers::patients::new_form).post(handlers::patients::create),
        )
        .route("/patients/{id}", get(handlers::patients::detail))
        .route(
            "/patients/{id}/edit",
            get(handlers::patients::edit_form).post(handlers::patients::update),
        )
        .route("/patients/{id}/delete", post(handlers::patients::delete))
        .route("/patients/{id}/visits/new", post(handlers::visits::add))
        .route(
            "/patients/{id}/visits/{vid}/delete",
            post(handlers::visits::delete),
        )
        .route(
            "/patients/{id}/medications/new",
            post(handlers::medications::add),
        )
        .route(
            "/patients/{id}/medications/{mid}/delete",
            post(handlers::medications::delete),
        )
        .route(
            "/patients/{id}/allergies/new",
            post(handlers::allergies::add),
        )
        .route(
            "/patients/{id}/allergies/{aid}/delete",
            post(handlers::allergies::delete),
        )
        .route("/healthz", get(handlers::healthz::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
