use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  /// Relay auth username, also used as the From address on outgoing mail.
  pub username: String,
  pub password: String,
}

/// One fully-addressed HTML email, ready to hand to a [`Mailer`].
///
/// [`Mailer`]: crate::email::Mailer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutgoingEmail {
  pub from_name: String,
  pub to: String,
  pub reply_to: String,
  pub subject: String,
  pub html_body: String,
}
