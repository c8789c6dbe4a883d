use axum::{
  extract::{Json, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{post, Router},
};
use serde_json::json;

use super::model::ContactForm;
use super::service::ContactServiceError;
use crate::state::{AppState, SharedAppState};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<ContactForm>,
) -> Response {
  match state.submit(payload).await {
    // Spam discards answer success too, so bots learn nothing.
    Ok(_) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
    Err(ContactServiceError::ValidationError(_)) => (
      StatusCode::BAD_REQUEST,
      Json(json!({ "error": "Missing required fields" })),
    )
      .into_response(),
    Err(ContactServiceError::DispatchError(message)) => {
      tracing::error!("Email Error: {}", message);
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to send email", "message": message })),
      )
        .into_response()
    }
  }
}
