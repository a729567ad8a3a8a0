//! Layered application configuration.
//!
//! Sources, lowest precedence first: `config/default`, `config/{APP_ENV}`,
//! `config/local` (all optional), `APP__SECTION__KEY` environment variables,
//! then the conventional `PORT` and `DIALOGFLOW_*` variables.

use std::path::PathBuf;

use config::{Config, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// Extensions accepted by the upload route.
pub const DEFAULT_UPLOAD_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx",
];

/// Extra extensions accepted when audio uploads are enabled.
pub const AUDIO_UPLOAD_EXTENSIONS: &[&str] = &["mp3", "wav", "m4a"];

/// 16 MiB request body cap.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub pages: PagesConfig,
    pub dialogflow: DialogflowConfig,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            allowed_origins: vec!["*".into()],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    /// Directory uploaded files are written to.
    pub dir: PathBuf,
    /// URL path under which `dir` is publicly served.
    pub public_prefix: String,
    pub allowed_extensions: Vec<String>,
    /// Also accept `mp3`, `wav` and `m4a`.
    pub allow_audio: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static/uploads"),
            public_prefix: "/static/uploads".into(),
            allowed_extensions: DEFAULT_UPLOAD_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
            allow_audio: false,
        }
    }
}

impl UploadConfig {
    /// Check a filename against the allow-list.
    ///
    /// The extension is the text after the last dot, compared
    /// case-insensitively. Names without a dot are rejected.
    pub fn allows(&self, filename: &str) -> bool {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        let ext = ext.to_lowercase();

        self.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext))
            || (self.allow_audio && AUDIO_UPLOAD_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Public URL path for a stored filename.
    ///
    /// The filename is percent-encoded as a single path segment, so names
    /// with spaces, `?` or `#` still resolve to the stored file.
    pub fn public_url(&self, filename: &str) -> Result<String> {
        let mut url = Url::parse("http://localhost/")
            .map_err(|e| Error::internal(format!("Failed to build upload URL: {}", e)))?;
        url.set_path(&self.public_prefix);
        url.path_segments_mut()
            .map_err(|_| Error::internal("Upload URL prefix cannot hold path segments"))?
            .pop_if_empty()
            .push(filename);
        Ok(url.path().to_string())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PagesConfig {
    /// Glob the page templates are loaded from.
    pub templates_glob: String,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            templates_glob: "templates/**/*.html".into(),
            static_dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DialogflowConfig {
    pub base_url: String,
    pub project_id: Option<String>,
    pub access_token: Option<Secret<String>>,
    pub language_code: String,
    pub timeout_secs: u64,
}

impl Default for DialogflowConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dialogflow.googleapis.com".into(),
            project_id: None,
            access_token: None,
            language_code: "en".into(),
            timeout_secs: 30,
        }
    }
}

impl DialogflowConfig {
    /// Whether enough settings are present to reach a real agent.
    pub fn is_configured(&self) -> bool {
        self.project_id
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
            && self.access_token.is_some()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Fallback filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub json_logs: bool,
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: "info,travel_assistant=debug,tower_http=info".into(),
            json_logs: false,
            otlp_endpoint: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Map APP__SERVER__PORT=8080 to server.port
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("upload.allowed_extensions")
                    .with_list_parse_key("server.allowed_origins"),
            )
            .build()?;

        let mut cfg: Self = s.try_deserialize()?;
        cfg.apply_conventional_env();
        Ok(cfg)
    }

    /// Overlay the un-prefixed variables hosting platforms and Google
    /// tooling set.
    fn apply_conventional_env(&mut self) {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(project) = std::env::var("DIALOGFLOW_PROJECT_ID") {
            self.dialogflow.project_id = Some(project);
        }
        let token = std::env::var("DIALOGFLOW_ACCESS_TOKEN")
            .or_else(|_| std::env::var("GOOGLE_OAUTH_ACCESS_TOKEN"));
        if let Ok(token) = token {
            self.dialogflow.access_token = Some(Secret::new(token));
        }
        if let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            self.telemetry.otlp_endpoint = Some(endpoint);
        }
    }
}
