//! Form payload normalization.
//!
//! Browsers submit every field as a string, present-but-empty when left
//! blank. These types turn the raw payloads into the core crate's insert
//! payloads: required names are trimmed and checked, dates go through the
//! lenient parser, and blank optional fields become absent rather than
//! empty strings.

use serde::Deserialize;

use clinic_ehr_core::dates::parse_date;
use clinic_ehr_core::{NewAllergy, NewMedication, NewPatient, NewVisit, Patient};

use crate::flash::Notice;

/// Blank string → absent; anything else kept verbatim.
fn opt(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Raw patient form, shared by the create and edit pages.
#[derive(Debug, Default, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub phone: String,
}

impl PatientForm {
    /// Validate for creation. Both names are required after trimming;
    /// a missing one rejects the whole submission.
    pub fn into_new_patient(self) -> Result<NewPatient, Notice> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(Notice::NameRequired);
        }
        Ok(NewPatient {
            first_name,
            last_name,
            date_of_birth: parse_date(&self.date_of_birth),
            sex: opt(self.sex),
            phone: opt(self.phone),
        })
    }

    /// Merge an edit submission into the stored patient.
    ///
    /// Names and date of birth are update-if-present: a blank name or a
    /// blank/unparseable date keeps the stored value, so neither can be
    /// cleared through the form. Sex and phone are overwritten each
    /// submit, with blank clearing them.
    pub fn apply_edit(self, patient: &mut Patient) {
        let first_name = self.first_name.trim();
        if !first_name.is_empty() {
            patient.first_name = first_name.to_string();
        }
        let last_name = self.last_name.trim();
        if !last_name.is_empty() {
            patient.last_name = last_name.to_string();
        }
        if let Some(date) = parse_date(&self.date_of_birth) {
            patient.date_of_birth = Some(date);
        }
        patient.sex = opt(self.sex);
        patient.phone = opt(self.phone);
    }
}

/// Raw visit form; every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct VisitForm {
    #[serde(default)]
    pub visit_date: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
}

impl VisitForm {
    pub fn into_new_visit(self, patient_id: i64) -> NewVisit {
        NewVisit {
            patient_id,
            visit_date: parse_date(&self.visit_date),
            reason: opt(self.reason),
            notes: opt(self.notes),
        }
    }
}

/// Raw medication form; `name` is required.
#[derive(Debug, Default, Deserialize)]
pub struct MedicationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
}

impl MedicationForm {
    pub fn into_new_medication(self, patient_id: i64) -> Result<NewMedication, Notice> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Notice::MedicationNameRequired);
        }
        Ok(NewMedication {
            patient_id,
            name,
            dosage: opt(self.dosage),
            frequency: opt(self.frequency),
        })
    }
}

/// Raw allergy form; `allergen` is required.
#[derive(Debug, Default, Deserialize)]
pub struct AllergyForm {
    #[serde(default)]
    pub allergen: String,
    #[serde(default)]
    pub reaction: String,
    #[serde(default)]
    pub severity: String,
}

impl AllergyForm {
    pub fn into_new_allergy(self, patient_id: i64) -> Result<NewAllergy, Notice> {
        let allergen = self.allergen.trim().to_string();
        if allergen.is_empty() {
            return Err(Notice::AllergenRequired);
        }
        Ok(NewAllergy {
            patient_id,
            allergen,
            reaction: opt(self.reaction),
            severity: opt(self.severity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stored_patient() -> Patient {
        Patient {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10),
            sex: Some("F".into()),
            phone: Some("555-0100".into()),
        }
    }

    #[test]
    fn test_create_requires_both_names() {
        let both_blank = PatientForm::default();
        assert_eq!(both_blank.into_new_patient(), Err(Notice::NameRequired));

        let only_first = PatientForm {
            first_name: "Ada".into(),
            ..Default::default()
        };
        assert_eq!(only_first.into_new_patient(), Err(Notice::NameRequired));

        let whitespace_last = PatientForm {
            first_name: "Ada".into(),
            last_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(whitespace_last.into_new_patient(), Err(Notice::NameRequired));
    }

    #[test]
    fn test_create_trims_names() {
        let form = PatientForm {
            first_name: "  Ada ".into(),
            last_name: " Lovelace ".into(),
            ..Default::default()
        };
        let patient = form.into_new_patient().unwrap();
        assert_eq!(patient.first_name, "Ada");
        assert_eq!(patient.last_name, "Lovelace");
    }

    #[test]
    fn test_create_blank_optionals_become_absent() {
        let form = PatientForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            ..Default::default()
        };
        let patient = form.into_new_patient().unwrap();
        assert_eq!(patient.date_of_birth, None);
        assert_eq!(patient.sex, None);
        assert_eq!(patient.phone, None);
    }

    #[test]
    fn test_create_unparseable_date_becomes_absent() {
        let form = PatientForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: "tenth of december".into(),
            ..Default::default()
        };
        let patient = form.into_new_patient().unwrap();
        assert_eq!(patient.date_of_birth, None);
    }

    #[test]
    fn test_edit_blank_name_keeps_stored_value() {
        let mut patient = stored_patient();
        let form = PatientForm {
            first_name: "Augusta".into(),
            last_name: "  ".into(),
            ..Default::default()
        };
        form.apply_edit(&mut patient);
        assert_eq!(patient.first_name, "Augusta");
        assert_eq!(patient.last_name, "Lovelace");
    }

    #[test]
    fn test_edit_blank_date_keeps_stored_value() {
        let mut patient = stored_patient();
        let form = PatientForm::default();
        form.apply_edit(&mut patient);
        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(1815, 12, 10));
    }

    #[test]
    fn test_edit_valid_date_overwrites() {
        let mut patient = stored_patient();
        let form = PatientForm {
            date_of_birth: "1820-01-01".into(),
            ..Default::default()
        };
        form.apply_edit(&mut patient);
        assert_eq!(patient.date_of_birth, NaiveDate::from_ymd_opt(1820, 1, 1));
    }

    #[test]
    fn test_edit_blank_sex_and_phone_clear() {
        let mut patient = stored_patient();
        let form = PatientForm::default();
        form.apply_edit(&mut patient);
        assert_eq!(patient.sex, None);
        assert_eq!(patient.phone, None);
    }

    #[test]
    fn test_visit_form_all_blank_is_valid() {
        let visit = VisitForm::default().into_new_visit(7);
        assert_eq!(visit.patient_id, 7);
        assert_eq!(visit.visit_date, None);
        assert_eq!(visit.reason, None);
        assert_eq!(visit.notes, None);
    }

    #[test]
    fn test_medication_requires_name() {
        let blank = MedicationForm::default();
        assert_eq!(
            blank.into_new_medication(1),
            Err(Notice::MedicationNameRequired)
        );

        let form = MedicationForm {
            name: " Aspirin ".into(),
            dosage: "81mg".into(),
            frequency: String::new(),
        };
        let med = form.into_new_medication(1).unwrap();
        assert_eq!(med.name, "Aspirin");
        assert_eq!(med.dosage, Some("81mg".into()));
        assert_eq!(med.frequency, None);
    }

    #[test]
    fn test_allergy_requires_allergen() {
        let blank = AllergyForm::default();
        assert_eq!(blank.into_new_allergy(1), Err(Notice::AllergenRequired));

        let form = AllergyForm {
            allergen: "Latex".into(),
            reaction: String::new(),
            severity: "severe".into(),
        };
        let allergy = form.into_new_allergy(1).unwrap();
        assert_eq!(allergy.allergen, "Latex");
        assert_eq!(allergy.reaction, None);
        assert_eq!(allergy.severity, Some("severe".into()));
    }
}
