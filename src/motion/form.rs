//! Contact form submission state machine.
//!
//! `Idle -> Submitting -> Submitted -> Idle`. Delivery goes through an
//! injected [`SubmissionBackend`]; without a real backend the
//! [`SimulatedBackend`] waits a fixed delay and discards the message.

use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeArea {
    Civel,
    Trabalhista,
    Criminal,
}

impl PracticeArea {
    pub const ALL: [PracticeArea; 3] = [
        PracticeArea::Civel,
        PracticeArea::Trabalhista,
        PracticeArea::Criminal,
    ];

    /// Value submitted by the `<select>` option.
    pub fn value(self) -> &'static str {
        match self {
            PracticeArea::Civel => "civel",
            PracticeArea::Trabalhista => "trabalhista",
            PracticeArea::Criminal => "criminal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PracticeArea::Civel => "Direito Cível",
            PracticeArea::Trabalhista => "Direito Trabalhista",
            PracticeArea::Criminal => "Direito Criminal",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|area| area.value() == value.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    MissingField(&'static str),
    InvalidEmail,
    UnknownPracticeArea(String),
    /// The backend refused or could not deliver the message.
    Rejected(String),
}

impl SubmitError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::MissingField(field) => format!("Preencha o campo obrigatório: {field}."),
            SubmitError::InvalidEmail => "Informe um e-mail válido.".to_string(),
            SubmitError::UnknownPracticeArea(_) => "Selecione uma área de interesse.".to_string(),
            SubmitError::Rejected(_) => {
                "Não foi possível enviar sua mensagem. Tente novamente ou fale conosco pelo WhatsApp.".to_string()
            }
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::MissingField(field) => write!(f, "required field `{field}` is empty"),
            SubmitError::InvalidEmail => f.write_str("email address is malformed"),
            SubmitError::UnknownPracticeArea(value) => write!(f, "unknown practice area `{value}`"),
            SubmitError::Rejected(reason) => write!(f, "submission rejected: {reason}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub practice_area: PracticeArea,
    pub message: String,
}

impl ContactMessage {
    /// Build from raw form values, enforcing the required fields.
    pub fn from_fields(
        name: &str,
        email: &str,
        phone: &str,
        practice_area: &str,
        message: &str,
    ) -> Result<Self, SubmitError> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        if !looks_like_email(&email) {
            return Err(SubmitError::InvalidEmail);
        }
        let area = required("subject", practice_area)?;
        let practice_area =
            PracticeArea::from_value(&area).ok_or(SubmitError::UnknownPracticeArea(area))?;
        let message = required("message", message)?;
        let phone = Some(phone.trim().to_string()).filter(|p| !p.is_empty());
        Ok(Self {
            name,
            email,
            phone,
            practice_area,
            message,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, SubmitError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Delivers a contact message somewhere.
#[allow(async_fn_in_trait)]
pub trait SubmissionBackend {
    async fn deliver(&self, message: ContactMessage) -> Result<(), SubmitError>;
}

/// Stand-in used while no real backend exists: waits, then drops the data.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmissionBackend for SimulatedBackend {
    async fn deliver(&self, message: ContactMessage) -> Result<(), SubmitError> {
        platform::sleep(self.latency).await;
        info!(
            area = message.practice_area.value(),
            has_phone = message.phone.is_some(),
            "simulated contact submission accepted"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed {
        reason: String,
    },
}

/// Identifies one submission chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Finished {
        ticket: SubmissionTicket,
        outcome: Result<(), SubmitError>,
    },
    Reset {
        ticket: SubmissionTicket,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    phase: FormPhase,
    active: Option<SubmissionTicket>,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Start a submission. Returns `None` while one is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmissionTicket> {
        if self.is_submitting() {
            debug!("submit ignored while a submission is in flight");
            return None;
        }
        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.active = Some(ticket);
        self.phase = FormPhase::Submitting;
        Some(ticket)
    }

    /// Apply a timer/backend event. Events for stale tickets are ignored.
    pub fn apply(&mut self, event: SubmissionEvent) -> bool {
        match event {
            SubmissionEvent::Finished { ticket, outcome } => {
                if self.active != Some(ticket) || !self.is_submitting() {
                    return false;
                }
                self.phase = match outcome {
                    Ok(()) => FormPhase::Submitted,
                    Err(err) => {
                        warn!("contact submission failed: {err}");
                        FormPhase::Failed { reason: err.user_message() }
                    }
                };
                true
            }
            SubmissionEvent::Reset { ticket } => {
                if self.active != Some(ticket) {
                    return false;
                }
                match self.phase {
                    FormPhase::Submitted | FormPhase::Failed { .. } => {
                        self.phase = FormPhase::Idle;
                        self.active = None;
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}

/// Drive one submission chain: deliver, show the outcome for `display_for`,
/// then return to idle.
pub async fn run_submission<B: SubmissionBackend>(
    backend: &B,
    message: ContactMessage,
    ticket: SubmissionTicket,
    display_for: Duration,
    mut apply: impl FnMut(SubmissionEvent),
) {
    let outcome = backend.deliver(message).await;
    apply(SubmissionEvent::Finished { ticket, outcome });
    platform::sleep(display_for).await;
    apply(SubmissionEvent::Reset { ticket });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::time::{sleep, Instant};

    fn sample_message() -> ContactMessage {
        ContactMessage::from_fields("Maria", "maria@example.com", "", "civel", "Preciso de ajuda").unwrap()
    }

    struct FailingBackend;

    impl SubmissionBackend for FailingBackend {
        async fn deliver(&self, _message: ContactMessage) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("offline".to_string()))
        }
    }

    #[test]
    fn test_second_submit_is_guarded_while_submitting() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_some());
        assert_eq!(*form.phase(), FormPhase::Submitting);
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_stale_ticket_events_are_ignored() {
        let mut form = ContactForm::new();
        let first = form.begin_submit().unwrap();
        form.apply(SubmissionEvent::Finished { ticket: first, outcome: Ok(()) });
        let second = form.begin_submit().unwrap();

        assert!(!form.apply(SubmissionEvent::Reset { ticket: first }));
        assert_eq!(*form.phase(), FormPhase::Submitting);
        assert!(form.apply(SubmissionEvent::Finished { ticket: second, outcome: Ok(()) }));
        assert!(form.apply(SubmissionEvent::Reset { ticket: second }));
        assert_eq!(*form.phase(), FormPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submission_timeline() {
        let form = Rc::new(RefCell::new(ContactForm::new()));
        let backend = SimulatedBackend::new(Duration::from_millis(1500));
        let ticket = form.borrow_mut().begin_submit().unwrap();
        assert_eq!(*form.borrow().phase(), FormPhase::Submitting);

        let start = Instant::now();
        let driver_form = form.clone();
        let driver = run_submission(
            &backend,
            sample_message(),
            ticket,
            Duration::from_millis(3000),
            move |event| {
                driver_form.borrow_mut().apply(event);
            },
        );
        let observer = async {
            sleep(Duration::from_millis(1499)).await;
            assert_eq!(*form.borrow().phase(), FormPhase::Submitting);
            assert!(form.borrow_mut().begin_submit().is_none());

            sleep(Duration::from_millis(2)).await;
            assert_eq!(*form.borrow().phase(), FormPhase::Submitted);

            sleep(Duration::from_millis(2998)).await;
            assert_eq!(*form.borrow().phase(), FormPhase::Submitted);

            sleep(Duration::from_millis(2)).await;
            assert_eq!(*form.borrow().phase(), FormPhase::Idle);
        };
        tokio::join!(driver, observer);
        assert!(start.elapsed() >= Duration::from_millis(4500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_failure_surfaces_then_resets() {
        let mut form = ContactForm::new();
        let ticket = form.begin_submit().unwrap();
        let mut events = Vec::new();
        run_submission(&FailingBackend, sample_message(), ticket, Duration::from_millis(3000), |e| {
            events.push(e)
        })
        .await;

        form.apply(events[0].clone());
        assert!(matches!(form.phase(), FormPhase::Failed { .. }));
        form.apply(events[1].clone());
        assert_eq!(*form.phase(), FormPhase::Idle);
    }

    #[test]
    fn test_message_validation() {
        assert_eq!(
            ContactMessage::from_fields("", "a@b", "", "civel", "x"),
            Err(SubmitError::MissingField("name"))
        );
        assert_eq!(
            ContactMessage::from_fields("Ana", "ana.example.com", "", "civel", "x"),
            Err(SubmitError::InvalidEmail)
        );
        assert_eq!(
            ContactMessage::from_fields("Ana", "ana@example.com", "", "", "x"),
            Err(SubmitError::MissingField("subject"))
        );
        assert_eq!(
            ContactMessage::from_fields("Ana", "ana@example.com", "", "tributario", "x"),
            Err(SubmitError::UnknownPracticeArea("tributario".to_string()))
        );

        let ok = ContactMessage::from_fields(" Ana ", "ana@example.com", " (61) 9999 ", "criminal", "Olá").unwrap();
        assert_eq!(ok.name, "Ana");
        assert_eq!(ok.phone.as_deref(), Some("(61) 9999"));
        assert_eq!(ok.practice_area, PracticeArea::Criminal);
    }
}
