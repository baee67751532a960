//! Test helpers: router factory wired to fake mail transports

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use mailform::config::{Config, EmailConfig, ObservabilityConfig, ServerConfig};
use mailform::email::{EmailService, MailTransport, OutgoingEmail};
use mailform::routes::{self, AppState};

/// A delivery captured by one of the fake transports.
#[derive(Debug, Clone)]
pub struct RecordedEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Records deliveries instead of talking to an SMTP server.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<RecordedEmail>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<RecordedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailTransport for RecordingTransport {
    fn deliver(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(RecordedEmail {
            to: email.to.clone(),
            subject: email.subject.clone(),
            html_body: email.html_body.clone(),
        });
        Ok(())
    }
}

/// Delivers the first `deliver_before_failing` messages, then fails every
/// attempt with a transport-flavored error.
pub struct FailingTransport {
    deliver_before_failing: usize,
    attempts: Mutex<usize>,
    sent: Arc<Mutex<Vec<RecordedEmail>>>,
}

impl FailingTransport {
    pub fn failing_after(deliver_before_failing: usize) -> Self {
        Self {
            deliver_before_failing,
            attempts: Mutex::new(0),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn sent(&self) -> Vec<RecordedEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl MailTransport for FailingTransport {
    fn deliver(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        let mut attempts = self.attempts.lock().unwrap();
        let attempt = *attempts;
        *attempts += 1;

        if attempt >= self.deliver_before_failing {
            anyhow::bail!("SMTP error: 535 5.7.8 authentication credentials invalid");
        }

        self.sent.lock().unwrap().push(RecordedEmail {
            to: email.to.clone(),
            subject: email.subject.clone(),
            html_body: email.html_body.clone(),
        });
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5001,
            production: false,
            images_dir: "images".to_string(),
            client_bundle_dir: "client/build".to_string(),
        },
        email: EmailConfig {
            service: "gmail".to_string(),
            username: "sender@example.com".to_string(),
            password: "app-password".to_string(),
            admin_address: "admin@example.com".to_string(),
            team_name: "The Mailform Team".to_string(),
        },
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_app(transport: Arc<dyn MailTransport>) -> Router {
    test_app_with(test_config(), transport)
}

pub fn test_app_with(config: Config, transport: Arc<dyn MailTransport>) -> Router {
    let email = EmailService::with_transport(transport, &config.email);
    routes::router(AppState { config, email })
}
