//! Validation notices carried across redirects.
//!
//! There is no session layer, so a failed validation redirects to the
//! originating GET view with a `?notice=<code>` query parameter. The GET
//! handler decodes the code back into the user-facing message and the base
//! template renders it once. Unknown codes are ignored.

use serde::Deserialize;

/// Closed set of validation notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NameRequired,
    MedicationNameRequired,
    AllergenRequired,
}

impl Notice {
    /// Stable code used in the redirect query string.
    pub fn code(self) -> &'static str {
        match self {
            Notice::NameRequired => "name-required",
            Notice::MedicationNameRequired => "medication-name-required",
            Notice::AllergenRequired => "allergen-required",
        }
    }

    /// Decode a query-string code; unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "name-required" => Some(Notice::NameRequired),
            "medication-name-required" => Some(Notice::MedicationNameRequired),
            "allergen-required" => Some(Notice::AllergenRequired),
            _ => None,
        }
    }

    /// User-facing message rendered by the base template.
    pub fn message(self) -> &'static str {
        match self {
            Notice::NameRequired => "First and last name are required",
            Notice::MedicationNameRequired => "Medication name is required",
            Notice::AllergenRequired => "Allergen is required",
        }
    }
}

/// Query payload for GET views that can show a pending notice.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    /// Decode the carried code, ignoring anything unrecognized.
    pub fn decode(&self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_code)
    }
}
