use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;

use super::model::{ContactForm, Disposition};
use super::templates;
use crate::config::AppConfig;
use crate::email::{Mailer, OutgoingEmail};

pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting Finacc Outsourcing";

#[derive(Debug)]
pub enum ContactServiceError {
  ValidationError(String),
  DispatchError(String),
}

impl Error for ContactServiceError {}

impl std::fmt::Display for ContactServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ContactServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      ContactServiceError::DispatchError(msg) => write!(f, "Dispatch Error: {}", msg),
    }
  }
}

/// How a submission was absorbed. Spam is reported as success to the caller,
/// so the distinction only exists server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
  Dispatched,
  SpamDiscarded,
}

#[async_trait]
pub trait ContactService: Send + Sync {
  async fn submit(&self, form: ContactForm) -> Result<SubmissionOutcome, ContactServiceError>;
}

pub struct ContactServiceImpl {
  mailer: Arc<dyn Mailer>,
  sender_email: String,
  recipient_email: String,
}

impl ContactServiceImpl {
  pub fn new(config: &AppConfig, mailer: Arc<dyn Mailer>) -> Self {
    Self {
      mailer,
      sender_email: config.smtp.username.clone(),
      recipient_email: config.recipient_email.clone(),
    }
  }

  fn confirmation_email(&self, form: &ContactForm) -> OutgoingEmail {
    OutgoingEmail {
      from_name: "Finacc Outsourcing".to_string(),
      to: form.email.clone(),
      reply_to: self.sender_email.clone(),
      subject: CONFIRMATION_SUBJECT.to_string(),
      html_body: templates::confirmation_html(&form.first_name),
    }
  }

  fn notification_email(&self, form: &ContactForm) -> OutgoingEmail {
    OutgoingEmail {
      from_name: "Finacc Contact Form".to_string(),
      to: self.recipient_email.clone(),
      reply_to: form.email.clone(),
      subject: format!("New Contact: {} {}", form.first_name, form.last_name),
      html_body: templates::notification_html(form),
    }
  }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
  async fn submit(&self, form: ContactForm) -> Result<SubmissionOutcome, ContactServiceError> {
    match form.disposition() {
      Disposition::Spam => {
        // Deliberately indistinguishable from success on the wire.
        tracing::info!("discarding submission flagged by honeypot");
        return Ok(SubmissionOutcome::SpamDiscarded);
      }
      Disposition::Invalid => {
        return Err(ContactServiceError::ValidationError("Missing required fields".to_string()));
      }
      Disposition::Valid => {}
    }

    // Confirmation first. If it fails the notification is never attempted.
    self
      .mailer
      .send(&self.confirmation_email(&form))
      .await
      .map_err(|e| ContactServiceError::DispatchError(e.to_string()))?;

    self
      .mailer
      .send(&self.notification_email(&form))
      .await
      .map_err(|e| ContactServiceError::DispatchError(e.to_string()))?;

    tracing::info!("contact submission dispatched for {} {}", form.first_name, form.last_name);

    Ok(SubmissionOutcome::Dispatched)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_support::{test_config, FailingMailer, RecordingMailer};

  fn valid_form() -> ContactForm {
    ContactForm {
      first_name: "Jane".to_string(),
      last_name: "Doe".to_string(),
      email: "jane@x.com".to_string(),
      company: None,
      phone: None,
      message: "Hi".to_string(),
      honeypot: None,
    }
  }

  #[tokio::test]
  async fn valid_submission_sends_confirmation_then_notification() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactServiceImpl::new(&test_config(), mailer.clone());

    let outcome = service.submit(valid_form()).await.expect("submit");
    assert_eq!(outcome, SubmissionOutcome::Dispatched);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, "jane@x.com");
    assert_eq!(sent[0].reply_to, "mailer@example.com");
    assert_eq!(sent[0].subject, CONFIRMATION_SUBJECT);
    assert_eq!(sent[0].from_name, "Finacc Outsourcing");

    assert_eq!(sent[1].to, "inbox@example.com");
    assert_eq!(sent[1].reply_to, "jane@x.com");
    assert_eq!(sent[1].subject, "New Contact: Jane Doe");
    assert_eq!(sent[1].from_name, "Finacc Contact Form");
  }

  #[tokio::test]
  async fn spam_submission_sends_nothing() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactServiceImpl::new(&test_config(), mailer.clone());

    let mut form = valid_form();
    form.honeypot = Some("bot".to_string());

    let outcome = service.submit(form).await.expect("submit");
    assert_eq!(outcome, SubmissionOutcome::SpamDiscarded);
    assert!(mailer.sent().is_empty());
  }

  #[tokio::test]
  async fn invalid_submission_sends_nothing() {
    let mailer = Arc::new(RecordingMailer::default());
    let service = ContactServiceImpl::new(&test_config(), mailer.clone());

    let mut form = valid_form();
    form.message = String::new();

    let result = service.submit(form).await;
    assert!(matches!(result, Err(ContactServiceError::ValidationError(_))));
    assert!(mailer.sent().is_empty());
  }

  #[tokio::test]
  async fn first_failure_aborts_the_sequence() {
    let mailer = Arc::new(FailingMailer::new("connection refused"));
    let service = ContactServiceImpl::new(&test_config(), mailer.clone());

    let result = service.submit(valid_form()).await;
    match result {
      Err(ContactServiceError::DispatchError(msg)) => assert_eq!(msg, "connection refused"),
      other => panic!("expected dispatch error, got {:?}", other),
    }
    assert_eq!(mailer.attempts(), 1);
  }
}
