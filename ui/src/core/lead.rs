//! Lead-capture form state, validation and the submit transition.
//!
//! Everything here is platform-agnostic; the `LeadFormCard` component only
//! forwards input events into [`LeadForm`] and renders what it reports.

use std::collections::BTreeSet;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// The five inputs of the lead form, in on-screen order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FieldName {
    Company,
    Name,
    Phone,
    Email,
    Requirement,
}

impl FieldName {
    /// Lowercase name used for the input's `name`/`id` attributes.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// In-memory values of the form. Starts empty, never leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub requirement: String,
}

impl LeadFormState {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Company => &self.company,
            FieldName::Name => &self.name,
            FieldName::Phone => &self.phone,
            FieldName::Email => &self.email,
            FieldName::Requirement => &self.requirement,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::Company => &mut self.company,
            FieldName::Name => &mut self.name,
            FieldName::Phone => &mut self.phone,
            FieldName::Email => &mut self.email,
            FieldName::Requirement => &mut self.requirement,
        }
    }
}

/// Names of every field whose value is the empty string.
///
/// Whitespace counts as content, matching the native `required` attribute.
pub fn validate(state: &LeadFormState) -> BTreeSet<FieldName> {
    FieldName::iter()
        .filter(|field| state.get(*field).is_empty())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

/// Submit was attempted while at least one required field was empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("incomplete submission: missing {}", join_fields(.missing))]
pub struct IncompleteSubmission {
    pub missing: BTreeSet<FieldName>,
}

impl IncompleteSubmission {
    /// First missing field in on-screen order; this one carries the inline hint.
    pub fn first_missing(&self) -> Option<FieldName> {
        self.missing.iter().next().copied()
    }
}

fn join_fields(fields: &BTreeSet<FieldName>) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returned by a successful [`LeadForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgement {
    /// How many times the form has been accepted during this page view.
    pub submissions: u32,
}

/// Form values plus the `Editing → Submitted` status and the last validation result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    state: LeadFormState,
    status: FormStatus,
    missing: BTreeSet<FieldName>,
    submissions: u32,
    last_accepted: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LeadFormState {
        &self.state
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Whether the acknowledgment is on screen: the most recent submit was
    /// accepted. A later blocked submit hides it while the status stays
    /// `Submitted`.
    pub fn is_acknowledged(&self) -> bool {
        self.status == FormStatus::Submitted && self.last_accepted
    }

    /// Fields flagged by the most recent blocked submit that are still empty.
    pub fn missing(&self) -> &BTreeSet<FieldName> {
        &self.missing
    }

    pub fn is_missing(&self, field: FieldName) -> bool {
        self.missing.contains(&field)
    }

    /// The field that shows the "please fill out" hint, if any.
    pub fn first_missing(&self) -> Option<FieldName> {
        self.missing.iter().next().copied()
    }

    /// Replace one field's value. Any string is accepted.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.missing.remove(&field);
        }
        *self.state.slot_mut(field) = value;
    }

    /// Validate the current values and, if complete, move to `Submitted`.
    ///
    /// Values are kept after a successful submit; submitting again
    /// acknowledges again.
    pub fn submit(&mut self) -> Result<Acknowledgement, IncompleteSubmission> {
        let missing = validate(&self.state);
        if !missing.is_empty() {
            self.last_accepted = false;
            self.missing = missing.clone();
            return Err(IncompleteSubmission { missing });
        }

        self.missing.clear();
        self.last_accepted = true;
        self.status = FormStatus::Submitted;
        self.submissions = self.submissions.saturating_add(1);
        Ok(Acknowledgement {
            submissions: self.submissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        let mut form = LeadForm::new();
        form.update_field(FieldName::Company, "Acme Co");
        form.update_field(FieldName::Name, "Jane Doe");
        form.update_field(FieldName::Phone, "555-1234");
        form.update_field(FieldName::Email, "jane@acme.com");
        form.update_field(FieldName::Requirement, "200 Lunch Meals Daily");
        form
    }

    #[test]
    fn starts_empty_and_editing() {
        let form = LeadForm::new();
        assert_eq!(form.state(), &LeadFormState::default());
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.is_acknowledged());
        assert_eq!(validate(form.state()).len(), 5);
    }

    #[test]
    fn last_write_wins_and_untouched_fields_stay_empty() {
        let mut form = LeadForm::new();
        form.update_field(FieldName::Name, "J");
        form.update_field(FieldName::Name, "Ja");
        form.update_field(FieldName::Email, "x@y");
        form.update_field(FieldName::Name, "Jane");
        form.update_field(FieldName::Email, "");

        assert_eq!(form.state().name, "Jane");
        assert_eq!(form.state().email, "");
        assert_eq!(form.state().phone, "");
        assert_eq!(form.state().company, "");
        assert_eq!(form.state().requirement, "");
    }

    #[test]
    fn field_names_parse_from_wire_names() {
        let names: Vec<_> = FieldName::iter().map(FieldName::as_str).collect();
        assert_eq!(names, ["company", "name", "phone", "email", "requirement"]);
        for field in FieldName::iter() {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
            assert_eq!(field.to_string(), field.as_str());
        }
        assert!("address".parse::<FieldName>().is_err());
    }

    #[test]
    fn any_single_empty_field_blocks_submit() {
        for hole in FieldName::iter() {
            let mut form = filled();
            form.update_field(hole, "");
            let err = form.submit().unwrap_err();
            assert_eq!(err.missing, BTreeSet::from([hole]));
            assert_eq!(err.first_missing(), Some(hole));
            assert_eq!(form.status(), FormStatus::Editing);
            assert_eq!(form.submissions(), 0);
        }
    }

    #[test]
    fn acme_scenario_is_acknowledged_and_values_are_kept() {
        let mut form = filled();
        let before = form.state().clone();

        let ack = form.submit().expect("complete form is accepted");
        assert_eq!(ack.submissions, 1);
        assert_eq!(form.status(), FormStatus::Submitted);
        assert!(form.is_acknowledged());
        assert_eq!(form.state(), &before);
        assert!(form.missing().is_empty());
    }

    #[test]
    fn phone_left_empty_is_never_acknowledged() {
        let mut form = LeadForm::new();
        form.update_field(FieldName::Company, "Acme Co");
        form.update_field(FieldName::Name, "Jane Doe");
        form.update_field(FieldName::Email, "jane@acme.com");
        form.update_field(FieldName::Requirement, "200 Lunch Meals Daily");

        assert!(form.submit().is_err());
        assert!(form.submit().is_err());
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(!form.is_acknowledged());
        assert_eq!(form.state().phone, "");
        assert!(form.is_missing(FieldName::Phone));
    }

    #[test]
    fn content_is_not_semantically_validated() {
        let mut form = LeadForm::new();
        for field in FieldName::iter() {
            form.update_field(field, " ");
        }
        form.update_field(FieldName::Email, "not-an-email");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn resubmission_acknowledges_again() {
        let mut form = filled();
        assert_eq!(form.submit().map(|a| a.submissions), Ok(1));
        assert_eq!(form.submit().map(|a| a.submissions), Ok(2));
        assert_eq!(form.status(), FormStatus::Submitted);
    }

    #[test]
    fn blocked_resubmit_keeps_status_but_hides_acknowledgement() {
        let mut form = filled();
        form.submit().unwrap();
        form.update_field(FieldName::Phone, "");
        assert!(form.is_acknowledged(), "editing alone keeps the message");

        assert!(form.submit().is_err());
        assert_eq!(form.status(), FormStatus::Submitted);
        assert_eq!(form.submissions(), 1);
        assert!(!form.is_acknowledged());
        assert_eq!(form.first_missing(), Some(FieldName::Phone));

        form.update_field(FieldName::Phone, "555-1234");
        assert!(form.submit().is_ok());
        assert!(form.is_acknowledged());
        assert_eq!(form.submissions(), 2);
    }

    #[test]
    fn typing_clears_the_missing_flag() {
        let mut form = LeadForm::new();
        let err = form.submit().unwrap_err();
        assert_eq!(err.first_missing(), Some(FieldName::Company));

        form.update_field(FieldName::Company, "Acme Co");
        assert!(!form.is_missing(FieldName::Company));
        assert_eq!(form.first_missing(), Some(FieldName::Name));

        form.update_field(FieldName::Name, "");
        assert!(form.is_missing(FieldName::Name));
    }

    #[test]
    fn error_message_lists_fields_in_screen_order() {
        let err = IncompleteSubmission {
            missing: BTreeSet::from([FieldName::Requirement, FieldName::Phone]),
        };
        assert_eq!(
            err.to_string(),
            "incomplete submission: missing phone, requirement"
        );
    }
}
