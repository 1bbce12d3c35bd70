//! Contact form model.
//!
//! Submission acknowledges and discards: there is no transport yet, so a
//! valid draft is cleared and a notice is raised. Where inquiries should
//! eventually go is intentionally left open.

use snafu::{ensure, Snafu};

use crate::copy::ContactCopy;

/// Field values as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    /// Desired vehicle (make/model/year/spec).
    pub vehicle: String,
    pub message: String,
}

/// Why a draft cannot be submitted. Mirrors what the browser's `required`
/// and `type=email` checks block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
pub enum FieldError {
    #[snafu(display("name is required"))]
    MissingName,
    #[snafu(display("email is required"))]
    MissingEmail,
    #[snafu(display("email address is malformed"))]
    InvalidEmail,
}

impl FieldError {
    /// Localized message for display next to the form.
    pub fn message(self, copy: &ContactCopy) -> &str {
        match self {
            FieldError::MissingName => &copy.missing_name,
            FieldError::MissingEmail => &copy.missing_email,
            FieldError::InvalidEmail => &copy.invalid_email,
        }
    }
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), FieldError> {
        // `required` on a text input only blocks an empty value.
        ensure!(!self.name.is_empty(), MissingNameSnafu);
        // `type=email` strips surrounding whitespace before checking.
        let email = self.email.trim();
        ensure!(!email.is_empty(), MissingEmailSnafu);
        ensure!(looks_like_email(email), InvalidEmailSnafu);
        Ok(())
    }
}

/// Proof that a submission was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment;

/// Form state for one page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    acknowledged: bool,
}

impl ContactForm {
    pub fn new(draft: ContactDraft) -> Self {
        Self {
            draft,
            acknowledged: false,
        }
    }

    /// Accept a valid draft: raise the notice and drop the values.
    ///
    /// On error the form is left exactly as it was.
    pub fn submit(&mut self) -> Result<Acknowledgment, FieldError> {
        self.draft.validate()?;
        self.draft = ContactDraft::default();
        self.acknowledged = true;
        Ok(Acknowledgment)
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// The single acknowledgment notice, if one is showing.
    pub fn notice<'a>(&self, copy: &'a ContactCopy) -> Option<&'a str> {
        self.acknowledged.then_some(copy.acknowledgment.as_str())
    }

    pub fn dismiss(&mut self) {
        self.acknowledged = false;
    }
}

/// Same bar as an `<input type=email>`: one `@` with text on both sides and
/// no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            ..ContactDraft::default()
        }
    }

    #[test]
    fn optional_fields_may_be_empty() {
        assert_eq!(draft("A. Ramirez", "a@example.com").validate(), Ok(()));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            draft("", "a@example.com").validate(),
            Err(FieldError::MissingName)
        );
    }

    #[test]
    fn whitespace_name_passes_like_native_required() {
        assert_eq!(draft("   ", "a@example.com").validate(), Ok(()));

        let mut form = ContactForm::new(draft("   ", "a@example.com"));
        assert_eq!(form.submit(), Ok(Acknowledgment));
        assert!(form.is_acknowledged());
    }

    #[test]
    fn email_checks() {
        assert_eq!(draft("A", "").validate(), Err(FieldError::MissingEmail));
        assert_eq!(draft("A", "nobody").validate(), Err(FieldError::InvalidEmail));
        assert_eq!(draft("A", "a@b@c").validate(), Err(FieldError::InvalidEmail));
        assert_eq!(draft("A", "a b@c").validate(), Err(FieldError::InvalidEmail));
        assert_eq!(draft("A", "@c").validate(), Err(FieldError::InvalidEmail));
        assert_eq!(draft("A", " a@c ").validate(), Ok(()));
    }

    #[test]
    fn submit_clears_draft_and_acknowledges() {
        let mut form = ContactForm::new(ContactDraft {
            vehicle: "Mercedes-AMG G63".into(),
            message: "Miami, before summer".into(),
            ..draft("M. Haddad", "m@example.com")
        });

        assert_eq!(form.submit(), Ok(Acknowledgment));
        assert!(form.is_acknowledged());
        assert_eq!(form.draft, ContactDraft::default());
    }

    #[test]
    fn failed_submit_changes_nothing() {
        let mut form = ContactForm::new(draft("", "m@example.com"));
        let before = form.clone();

        assert_eq!(form.submit(), Err(FieldError::MissingName));
        assert_eq!(form, before);
    }

    #[test]
    fn dismiss_hides_notice() {
        let mut form = ContactForm::new(draft("A", "a@example.com"));
        form.submit().expect("valid draft");
        form.dismiss();
        assert!(!form.is_acknowledged());
    }
}
