use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;

use finacc_contact_api::app::create_app;
use finacc_contact_api::config::AppConfig;
use finacc_contact_api::email::EmailService;
use finacc_contact_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = AppConfig::from_env()?;

  let email_service = EmailService::new(config.smtp.clone())?;
  let app_state = SharedAppState::new(&config, Arc::new(email_service));
  let app = create_app(app_state);

  let addr = format!("0.0.0.0:{}", config.port);
  let listener = tokio::net::TcpListener::bind(&addr).await?;

  println!("Email server running on http://{}", addr);
  println!("API endpoint: /api/send-email");

  axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
