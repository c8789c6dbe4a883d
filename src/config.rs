use std::env;

use anyhow::Context;

use crate::email::SmtpConfig;

/// Process-wide configuration, read from the environment once at startup.
///
/// Everything the dispatcher needs is carried here explicitly so handlers and
/// services never touch `std::env` at request time.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub smtp: SmtpConfig,
  pub recipient_email: String,
}

const DEFAULT_PORT: u16 = 3001;

impl AppConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    let port = match env::var("PORT") {
      Ok(value) => value.parse::<u16>().context("PORT must be a valid port number")?,
      Err(_) => DEFAULT_PORT,
    };

    let smtp = SmtpConfig {
      host: env::var("SMTP_HOST").context("SMTP_HOST environment variable must be set")?,
      port: env::var("SMTP_PORT")
        .context("SMTP_PORT environment variable must be set")?
        .parse::<u16>()
        .context("SMTP_PORT must be a valid port number")?,
      username: env::var("SMTP_USER").context("SMTP_USER environment variable must be set")?,
      password: env::var("SMTP_PASS").context("SMTP_PASS environment variable must be set")?,
    };

    let recipient_email =
      env::var("RECIPIENT_EMAIL").context("RECIPIENT_EMAIL environment variable must be set")?;

    Ok(AppConfig {
      port,
      smtp,
      recipient_email,
    })
  }
}
