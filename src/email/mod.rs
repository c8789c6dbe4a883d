//! Email sending functionality module
//!
//! Wraps lettre's async SMTP transport behind a small `Mailer` trait so the
//! contact service can be exercised against a fake transport in tests.

mod service;
mod types;

pub use service::{EmailService, Mailer};
pub use types::{OutgoingEmail, SmtpConfig};
