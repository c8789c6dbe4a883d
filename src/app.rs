use axum::{response::Html, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{domains::contact::rest::contact_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  // The form is served from a separate frontend, so every origin is allowed.
  let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

  Router::new()
    .route("/", get(landing_handler))
    .nest("/api", contact_routes())
    .with_state(state)
    .layer(cors)
}

pub async fn landing_handler() -> Html<String> {
  Html("<h1>Finacc contact relay</h1>".to_string())
}
