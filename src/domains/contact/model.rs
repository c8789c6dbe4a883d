use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form submission. Lives for one request only.
///
/// Required fields use `#[serde(default)]` so an absent key deserializes to an
/// empty string and falls through to validation, which keeps the 400 contract
/// instead of surfacing a deserialization error.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
  #[serde(default)]
  #[validate(length(min = 1))]
  pub first_name: String,
  #[serde(default)]
  #[validate(length(min = 1))]
  pub last_name: String,
  #[serde(default)]
  #[validate(length(min = 1))]
  pub email: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub company: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(default)]
  #[validate(length(min = 1))]
  pub message: String,
  /// Hidden form field. Humans never fill it, so any value marks a bot.
  #[serde(default, rename = "_honeypot", skip_serializing_if = "Option::is_none")]
  pub honeypot: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
  Spam,
  Invalid,
  Valid,
}

impl ContactForm {
  pub fn is_spam(&self) -> bool {
    self.honeypot.as_deref().is_some_and(|value| !value.is_empty())
  }

  /// Classify the submission. Spam wins over validation so bots get the same
  /// success response regardless of what else they filled in.
  pub fn disposition(&self) -> Disposition {
    if self.is_spam() {
      Disposition::Spam
    } else if self.validate().is_err() {
      Disposition::Invalid
    } else {
      Disposition::Valid
    }
  }
}
