use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::toast::Toast;

/// Stand-in for network latency before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nombre",
            Field::Email => "Email",
            Field::Subject => "Asunto",
            Field::Message => "Mensaje",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Tu nombre",
            Field::Email => "tu@email.com",
            Field::Subject => "¿De qué se trata?",
            Field::Message => "Escribe tu mensaje aquí...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("El campo {0} es obligatorio")]
    MissingField(Field),
    #[error("Ya se está enviando un mensaje")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), DraftError> {
        match Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            Some(field) => Err(DraftError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
}

/// The simulated submission flow: `begin` when the form is submitted,
/// `complete` once [`SUBMIT_DELAY`] has elapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    pub fn begin(&mut self) -> Result<(), DraftError> {
        if self.is_sending() {
            return Err(DraftError::InFlight);
        }
        self.draft.validate()?;
        self.status = SubmitStatus::Sending;
        Ok(())
    }

    /// Finishes the pending submission: clears every field and yields the success toast.
    pub fn complete(&mut self) -> Option<Toast> {
        if !self.is_sending() {
            return None;
        }
        self.draft = ContactDraft::default();
        self.status = SubmitStatus::Idle;
        Some(Toast::success(
            "Mensaje enviado",
            "Gracias por contactarme. Te responderé pronto.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.draft.set(Field::Name, "Hornet");
        form.draft.set(Field::Email, "hornet@hallownest.com");
        form.draft.set(Field::Subject, "Colaboración");
        form.draft.set(Field::Message, "Hola, me interesa tu proyecto.");
        form
    }

    #[test]
    fn test_submission_notifies_and_clears() {
        let mut form = filled();
        assert!(form.begin().is_ok());
        assert!(form.is_sending());
        // fields stay populated while the delay runs
        assert_eq!(form.draft.name, "Hornet");

        let toast = form.complete().expect("completion should produce a toast");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Mensaje enviado");
        assert!(form.draft.is_empty());
        for field in Field::ALL {
            assert_eq!(form.draft.get(field), "");
        }
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_blank_fields_are_refused() {
        let mut form = filled();
        form.draft.set(Field::Subject, "   ");
        assert_eq!(
            form.begin(),
            Err(DraftError::MissingField(Field::Subject))
        );
        assert_eq!(form.status(), SubmitStatus::Idle);

        let mut empty = ContactForm::default();
        assert_eq!(empty.begin(), Err(DraftError::MissingField(Field::Name)));
        assert!(empty.complete().is_none());
    }

    #[test]
    fn test_double_submit_is_refused() {
        let mut form = filled();
        form.begin().expect("first submission is accepted");
        assert_eq!(form.begin(), Err(DraftError::InFlight));
        assert!(form.complete().is_some());
        assert!(form.complete().is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DraftError::MissingField(Field::Email).to_string(),
            "El campo Email es obligatorio"
        );
    }
}
