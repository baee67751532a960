//! Email delivery for the contact-form flow using lettre

use std::sync::Arc;

use anyhow::Context;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use mailform_contact::Submission;

use crate::config::EmailConfig;

/// A rendered message bound to a destination, handed to the transport.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Delivery capability the submission handler depends on.
///
/// Production wires [`SmtpMailer`]; tests substitute recording fakes.
pub trait MailTransport: Send + Sync {
    fn deliver(&self, email: &OutgoingEmail) -> anyhow::Result<()>;

    /// Connectivity self-check, surfaced only as a startup diagnostic.
    fn check(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// SMTP transport built from the configured provider profile and credentials.
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let host = config.relay_host();

        let transport = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %host,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(host).build()
        } else {
            tracing::info!(
                smtp_host = %host,
                from = %config.username,
                "Email transport initialized with authentication and TLS"
            );
            // SmtpTransport::relay() uses STARTTLS by default for secure connections
            let creds = Credentials::new(config.username.clone(), config.password.clone());
            SmtpTransport::relay(host)?.credentials(creds).build()
        };

        let sender = if config.username.is_empty() {
            "contact@localhost"
        } else {
            config.username.as_str()
        };
        let from = sender
            .parse()
            .context("Failed to parse sender address")?;

        Ok(Self { transport, from })
    }
}

impl MailTransport for SmtpMailer {
    fn deliver(&self, email: &OutgoingEmail) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email
                .to
                .parse()
                .context("Failed to parse recipient address")?)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())
            .context("Failed to build email message")?;

        self.transport
            .send(&message)
            .context("SMTP delivery failed")?;

        Ok(())
    }

    fn check(&self) -> anyhow::Result<()> {
        match self.transport.test_connection() {
            Ok(true) => Ok(()),
            Ok(false) => Err(anyhow::anyhow!("SMTP server rejected the connection")),
            Err(e) => Err(e.into()),
        }
    }
}

/// Email service for the contact-form flow: one notification to the
/// administrator, one acknowledgement back to the submitter.
#[derive(Clone)]
pub struct EmailService {
    transport: Arc<dyn MailTransport>,
    admin_address: String,
    team_name: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpMailer::new(config)?;
        Ok(Self::with_transport(Arc::new(mailer), config))
    }

    /// Build the service around an arbitrary transport so tests can
    /// substitute a fake.
    pub fn with_transport(transport: Arc<dyn MailTransport>, config: &EmailConfig) -> Self {
        // Submissions land in the sender's own inbox when no administrator
        // address is configured.
        let admin_address = if config.admin_address.is_empty() {
            config.username.clone()
        } else {
            config.admin_address.clone()
        };

        Self {
            transport,
            admin_address,
            team_name: config.team_name.clone(),
        }
    }

    /// Startup connectivity diagnostic. Logs the outcome; never prevents the
    /// server from accepting traffic.
    pub fn verify_connection(&self) {
        match self.transport.check() {
            Ok(()) => tracing::info!("SMTP server connection established"),
            Err(e) => tracing::warn!(error = %e, "SMTP server connection error"),
        }
    }

    pub async fn send_contact_notification(&self, submission: &Submission) -> anyhow::Result<()> {
        let email = mailform_contact::notification(submission)?;

        tracing::info!(
            to = %self.admin_address,
            subject = %email.subject,
            "Sending contact notification"
        );

        self.transport.deliver(&OutgoingEmail {
            to: self.admin_address.clone(),
            subject: email.subject,
            html_body: email.html_body,
        })
    }

    pub async fn send_auto_reply(&self, submission: &Submission) -> anyhow::Result<()> {
        let email = mailform_contact::auto_reply(submission, &self.team_name)?;

        tracing::info!(
            to = %submission.email,
            subject = %email.subject,
            "Sending auto-reply"
        );

        self.transport.deliver(&OutgoingEmail {
            to: submission.email.clone(),
            subject: email.subject,
            html_body: email.html_body,
        })
    }
}
