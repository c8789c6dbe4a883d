use std::sync::Arc;

use crate::config::AppConfig;
use crate::domains::contact::{
  model::ContactForm,
  service::{ContactService, ContactServiceError, ContactServiceImpl, SubmissionOutcome},
};
use crate::email::Mailer;

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit(
    &self,
    form: ContactForm,
  ) -> impl std::future::Future<Output = Result<SubmissionOutcome, ContactServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub contact_service: Arc<ContactServiceImpl>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig, mailer: Arc<dyn Mailer>) -> Self {
    let contact_service = Arc::new(ContactServiceImpl::new(config, mailer));

    Self { contact_service }
  }
}

impl AppState for SharedAppState {
  async fn submit(&self, form: ContactForm) -> Result<SubmissionOutcome, ContactServiceError> {
    self.contact_service.submit(form).await
  }
}
