use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Production mode additionally serves the prebuilt client bundle.
    #[serde(default)]
    pub production: bool,
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    #[serde(default = "default_client_bundle_dir")]
    pub client_bundle_dir: String,
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_client_bundle_dir() -> String {
    "client/build".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// Provider profile for the SMTP relay (gmail, outlook, ...). Anything
    /// unrecognized is treated as a relay hostname.
    #[serde(default = "default_service")]
    pub service: String,
    /// Sender account; also the notification destination when no
    /// administrator address is configured.
    #[serde(default)]
    pub username: String,
    /// Account secret or app password.
    #[serde(default)]
    pub password: String,
    /// Where contact-form submissions are forwarded.
    #[serde(default)]
    pub admin_address: String,
    /// Signature on the auto-reply closing line.
    #[serde(default = "default_team_name")]
    pub team_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            username: String::new(),
            password: String::new(),
            admin_address: String::new(),
            team_name: default_team_name(),
        }
    }
}

impl EmailConfig {
    /// Resolve the provider profile to an SMTP relay host.
    pub fn relay_host(&self) -> &str {
        match self.service.as_str() {
            "gmail" => "smtp.gmail.com",
            "hotmail" | "outlook" | "office365" => "smtp-mail.outlook.com",
            "yahoo" => "smtp.mail.yahoo.com",
            "icloud" => "smtp.mail.me.com",
            "zoho" => "smtp.zoho.com",
            host => host,
        }
    }
}

fn default_service() -> String {
    "gmail".to_string()
}

fn default_team_name() -> String {
    "The Team".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MAILFORM__EMAIL__USERNAME, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (MAILFORM__EMAIL__USERNAME, etc.)
        builder = builder.add_source(
            Environment::with_prefix("MAILFORM")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the legacy environment variables without prefix
        if let Ok(service) = env::var("EMAIL_SERVICE") {
            builder = builder.set_override("email.service", service)?;
        }
        if let Ok(user) = env::var("EMAIL_USER") {
            builder = builder.set_override("email.username", user)?;
        }
        if let Ok(password) = env::var("EMAIL_PASSWORD") {
            builder = builder.set_override("email.password", password)?;
        }
        if let Ok(admin) = env::var("ADMIN_EMAIL") {
            builder = builder.set_override("email.admin_address", admin)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(node_env) = env::var("NODE_ENV") {
            builder = builder.set_override("server.production", node_env == "production")?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Credential problems are deliberately not rejected here: the transport
    /// self-check reports them at startup and submissions fail per request.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.server.images_dir.is_empty() {
            return Err("Images directory must not be empty".to_string());
        }
        Ok(())
    }
}
