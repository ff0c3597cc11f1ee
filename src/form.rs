//! Contact form pipeline: collect, validate, submit, report.
//!
//! The pipeline is pure state; the contact section component drives it
//! from DOM events and a delivery `Action`. Modeling `SubmissionState` as
//! a tagged enum (instead of an `is_submitting` flag) makes the
//! double-submit guard a property of the API: `try_submit` yields a
//! payload at most once per in-flight attempt.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::delivery::DeliveryError;

pub const NAME_MIN_LEN: usize = 2;
pub const MESSAGE_MIN_LEN: usize = 10;

/// The three user-editable fields, cleared only on confirmed delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Per-field validation failure, surfaced inline next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("please enter a valid email address")]
    InvalidFormat,
}

/// Derived mapping from field to its current error, recomputed on every
/// validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}

/// Synchronous validation pass. Any error blocks submission entirely.
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if form.name.chars().count() < NAME_MIN_LEN {
        errors.name = Some(FieldError::TooShort { min: NAME_MIN_LEN });
    }
    if !is_valid_email(&form.email) {
        errors.email = Some(FieldError::InvalidFormat);
    }
    if form.message.chars().count() < MESSAGE_MIN_LEN {
        errors.message = Some(FieldError::TooShort {
            min: MESSAGE_MIN_LEN,
        });
    }
    errors
}

/// Standard email grammar: non-empty local part, `@`, dotted domain whose
/// labels are alphanumeric-or-hyphen with an alphabetic final label.
fn is_valid_email(addr: &str) -> bool {
    let Some((local, domain)) = addr.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    let Some(tld) = labels.next_back() else {
        return false;
    };
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let mut label_count = 1;
    for label in labels {
        label_count += 1;
        if label.is_empty()
            || !label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return false;
        }
    }
    label_count >= 2
}

/// Where the current (or latest) submission attempt stands.
///
/// `Succeeded` and `Failed` are transient: the next edit or submit attempt
/// re-arms to `Idle`. Only `Submitting` blocks a new attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Why `try_submit` refused to start a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A delivery attempt is already in flight.
    InFlight,
    /// One or more fields failed validation; errors are stored inline.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One user-visible notice per terminal transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: &'static str,
    pub detail: &'static str,
}

impl Notice {
    fn sent() -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Message sent!",
            detail: "Thank you for reaching out. I'll get back to you soon.",
        }
    }

    fn failed() -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Something went wrong",
            detail: "Unable to send message. Please try again later.",
        }
    }
}

/// The whole form lifecycle for one contact section instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPipeline {
    form: ContactForm,
    state: SubmissionState,
    errors: ValidationErrors,
}

impl ContactPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// Apply one keystroke's worth of input. Editing re-arms a settled
    /// (`Succeeded`/`Failed`) pipeline and clears the edited field's stale
    /// inline error; full validation reruns on the next submit attempt.
    pub fn edit(&mut self, field: Field, value: String) {
        if matches!(
            self.state,
            SubmissionState::Succeeded | SubmissionState::Failed
        ) {
            self.state = SubmissionState::Idle;
        }
        match field {
            Field::Name => {
                self.form.name = value;
                self.errors.name = None;
            }
            Field::Email => {
                self.form.email = value;
                self.errors.email = None;
            }
            Field::Message => {
                self.form.message = value;
                self.errors.message = None;
            }
        }
    }

    /// Attempt the `Idle → Submitting` transition. On success, returns the
    /// payload to hand to the delivery call; exactly one payload can be
    /// outstanding at a time.
    pub fn try_submit(&mut self) -> Result<ContactForm, SubmitBlocked> {
        if self.state.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        self.errors = ValidationErrors::default();
        self.state = SubmissionState::Submitting;
        Ok(self.form.clone())
    }

    /// Settle the in-flight attempt with the delivery outcome. Success
    /// clears the inputs; failure preserves them for resubmission. Returns
    /// the notice to surface, or `None` if no attempt was in flight (e.g.
    /// a late result after the form was re-armed or torn down).
    pub fn resolve(&mut self, outcome: Result<(), DeliveryError>) -> Option<Notice> {
        if !self.state.is_submitting() {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.form = ContactForm::default();
                Some(Notice::sent())
            }
            Err(err) => {
                log::warn!("contact delivery failed: {err}");
                self.state = SubmissionState::Failed;
                Some(Notice::failed())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            message: "a sufficiently long message".to_string(),
        }
    }

    #[test]
    fn test_validate_short_name_and_message() {
        let errors = validate(&ContactForm {
            name: "A".to_string(),
            email: "x@y.com".to_string(),
            message: "short".to_string(),
        });
        assert_eq!(errors.name, Some(FieldError::TooShort { min: 2 }));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, Some(FieldError::TooShort { min: 10 }));
    }

    #[test]
    fn test_validate_bad_email_only() {
        let errors = validate(&ContactForm {
            name: "Jo".to_string(),
            email: "not-an-email".to_string(),
            message: "a sufficiently long message".to_string(),
        });
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(FieldError::InvalidFormat));
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_validate_accepts_valid_form() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_email_grammar() {
        for ok in ["x@y.com", "first.last@sub.domain.org", "a+b@y-z.co"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "@y.com",
            "x@",
            "x@y",
            "x@.com",
            "x@y..com",
            "x@y.c",
            "x@y.123",
            "a b@y.com",
            "x@y@z.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_submit_blocked_while_in_flight() {
        let mut pipeline = ContactPipeline::new();
        pipeline.edit(Field::Name, "Jo".to_string());
        pipeline.edit(Field::Email, "jo@example.com".to_string());
        pipeline.edit(Field::Message, "a sufficiently long message".to_string());

        // rapid double-click: exactly one payload is handed out
        assert!(pipeline.try_submit().is_ok());
        assert_eq!(pipeline.try_submit(), Err(SubmitBlocked::InFlight));
        assert_eq!(pipeline.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_submit_blocked_by_validation() {
        let mut pipeline = ContactPipeline::new();
        pipeline.edit(Field::Name, "A".to_string());
        assert_eq!(pipeline.try_submit(), Err(SubmitBlocked::Invalid));
        assert_eq!(
            pipeline.field_error(Field::Name),
            Some(FieldError::TooShort { min: 2 })
        );
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_editing_clears_stale_inline_error() {
        let mut pipeline = ContactPipeline::new();
        assert_eq!(pipeline.try_submit(), Err(SubmitBlocked::Invalid));
        assert!(pipeline.field_error(Field::Email).is_some());
        pipeline.edit(Field::Email, "jo@example.com".to_string());
        assert_eq!(pipeline.field_error(Field::Email), None);
        // other fields keep their errors until revalidation
        assert!(pipeline.field_error(Field::Name).is_some());
    }

    #[test]
    fn test_success_clears_fields_and_notices_once() {
        let mut pipeline = ContactPipeline::new();
        let form = valid_form();
        pipeline.edit(Field::Name, form.name.clone());
        pipeline.edit(Field::Email, form.email.clone());
        pipeline.edit(Field::Message, form.message.clone());

        let payload = pipeline.try_submit().expect("valid form should submit");
        assert_eq!(payload, form);

        let notice = pipeline.resolve(Ok(())).expect("first settle notices");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(pipeline.form(), &ContactForm::default());
        assert_eq!(pipeline.state(), SubmissionState::Succeeded);

        // duplicate settle (late callback) is ignored
        assert_eq!(pipeline.resolve(Ok(())), None);

        // next edit re-arms for the next message
        pipeline.edit(Field::Name, "Jo".to_string());
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_failure_preserves_fields_and_notices_once() {
        let mut pipeline = ContactPipeline::new();
        let form = valid_form();
        pipeline.edit(Field::Name, form.name.clone());
        pipeline.edit(Field::Email, form.email.clone());
        pipeline.edit(Field::Message, form.message.clone());
        pipeline.try_submit().expect("valid form should submit");

        let notice = pipeline
            .resolve(Err(DeliveryError::Timeout))
            .expect("first settle notices");
        assert_eq!(notice.level, NoticeLevel::Error);
        // inputs intact so the user need not retype
        assert_eq!(pipeline.form(), &form);
        assert_eq!(pipeline.state(), SubmissionState::Failed);

        // no automatic retry: a new attempt requires an explicit submit,
        // which is permitted again from the settled state
        assert_eq!(pipeline.resolve(Err(DeliveryError::Timeout)), None);
        assert!(pipeline.try_submit().is_ok());
    }

    #[test]
    fn test_resolve_without_attempt_is_ignored() {
        let mut pipeline = ContactPipeline::new();
        assert_eq!(pipeline.resolve(Ok(())), None);
        assert_eq!(pipeline.state(), SubmissionState::Idle);
    }
}
