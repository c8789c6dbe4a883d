use crate::email::types::{OutgoingEmail, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType,
  transport::smtp::authentication::Credentials,
  transport::smtp::client::{Tls, TlsParameters},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Seam between the contact service and the SMTP transport.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, email: &OutgoingEmail) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    // The upstream relay presents a self-signed certificate, so the STARTTLS
    // upgrade must not verify it. The channel still encrypts when offered.
    let tls = TlsParameters::builder(smtp_config.host.clone())
      .dangerous_accept_invalid_certs(true)
      .dangerous_accept_invalid_hostnames(true)
      .build()?;

    let transporter = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
      .credentials(creds)
      .port(smtp_config.port)
      .tls(Tls::Opportunistic(tls))
      .build();

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send(&self, email: &OutgoingEmail) -> Result<()> {
    let from = format!("\"{}\" <{}>", email.from_name, self.smtp_config.username);

    let message = Message::builder()
      .from(from.parse()?)
      .reply_to(email.reply_to.parse()?)
      .to(email.to.parse()?)
      .subject(&email.subject)
      .header(ContentType::TEXT_HTML)
      .body(email.html_body.clone())?;

    self.transporter.send(message).await?;

    Ok(())
  }
}
