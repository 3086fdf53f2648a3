use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use client_core::{
    config::normalize_server_url, load_settings, History, HttpAccountApi, Notification,
    NotificationCenter, NotificationEvent, RegistrationFormController, Route, SignUpForm,
    SignUpInput, SubmitOutcome,
};
use shared::domain::NotificationKind;
use tokio::sync::{broadcast, oneshot};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Register a new account")]
struct Args {
    /// Overrides the server url from signup.toml / APP__SERVER_URL.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(server_url) = args.server_url.as_deref() {
        settings.server_url = normalize_server_url(server_url)?;
    }

    let notifications = NotificationCenter::init(settings.notification_ttl());
    let (stop_tx, stop_rx) = oneshot::channel();
    let printer = tokio::spawn(print_notifications(
        notifications.subscribe(),
        stop_rx,
        |line| println!("{line}"),
    ));

    let form = Arc::new(SignUpForm::new());
    let history = Arc::new(History::starting_at(Route::SignUp));
    let controller = RegistrationFormController::new(
        form.clone(),
        Arc::new(HttpAccountApi::new(settings.server_url.clone())),
        Arc::new(notifications.clone()),
        history.clone(),
    );

    info!(server_url = %settings.server_url, "submitting registration");
    let input = SignUpInput::new(args.name, args.email, args.password);
    match controller.submit(input).await {
        SubmitOutcome::Rejected(_) => {
            for field in form.fields() {
                if let Some(message) = form.error_for(field.name) {
                    println!("{}: {message}", field.placeholder);
                }
            }
        }
        SubmitOutcome::Registered | SubmitOutcome::Failed => {}
    }
    println!("current route: {}", history.current().path());

    let _ = stop_tx.send(());
    if let Err(err) = printer.await {
        warn!(error = %err, "notification printer task failed");
    }
    Ok(())
}

fn format_notification(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    format!(
        "[{marker}] {}: {}",
        notification.title, notification.description
    )
}

/// Writes each shown notification until `stop` fires. Events already queued
/// when `stop` fires are still written.
async fn print_notifications(
    mut events: broadcast::Receiver<NotificationEvent>,
    mut stop: oneshot::Receiver<()>,
    mut write: impl FnMut(String),
) {
    loop {
        tokio::select! {
            biased;
            event = events.recv() => match event {
                Ok(NotificationEvent::Shown(notification)) => {
                    write(format_notification(&notification));
                }
                Ok(NotificationEvent::Dismissed(_)) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped, "notification printer fell behind");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            _ = &mut stop => break,
        }
    }
}
