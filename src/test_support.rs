use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{Mailer, OutgoingEmail, SmtpConfig},
  state::SharedAppState,
};

pub fn test_config() -> AppConfig {
  AppConfig {
    port: 3001,
    smtp: SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      username: "mailer@example.com".to_string(),
      password: "secret".to_string(),
    },
    recipient_email: "inbox@example.com".to_string(),
  }
}

pub fn app_with_mailer(mailer: Arc<dyn Mailer>) -> Router {
  let state = SharedAppState::new(&test_config(), mailer);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

/// Mailer that records every email instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
  sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
  pub fn sent(&self) -> Vec<OutgoingEmail> {
    self.sent.lock().expect("lock sent emails").clone()
  }
}

#[async_trait]
impl Mailer for RecordingMailer {
  async fn send(&self, email: &OutgoingEmail) -> Result<()> {
    self.sent.lock().expect("lock sent emails").push(email.clone());
    Ok(())
  }
}

/// Mailer that fails every send with a fixed message, counting attempts.
pub struct FailingMailer {
  message: String,
  attempts: Mutex<usize>,
}

impl FailingMailer {
  pub fn new(message: &str) -> Self {
    Self {
      message: message.to_string(),
      attempts: Mutex::new(0),
    }
  }

  pub fn attempts(&self) -> usize {
    *self.attempts.lock().expect("lock attempt count")
  }
}

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _email: &OutgoingEmail) -> Result<()> {
    *self.attempts.lock().expect("lock attempt count") += 1;
    Err(anyhow!(self.message.clone()))
  }
}
