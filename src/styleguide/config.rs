use crate::error::{Result, StyleguideError};
use std::path::PathBuf;

pub const DEFAULT_API_HOST: &str = "api.apiary.io";
pub const DEFAULT_VK_URL: &str =
    "https://voight-kampff-aws.apiary-services.com/production/validate";

/// Options resolved once at startup. Built by the binary from parsed
/// arguments (environment fallbacks included) and passed by reference
/// everywhere; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_host: String,
    pub proxy: Option<String>,
    pub vk_url: String,
    /// API description source, a file or a project directory.
    pub add: PathBuf,
    pub functions: PathBuf,
    pub rules: PathBuf,
    pub failed_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_host: DEFAULT_API_HOST.to_string(),
            proxy: None,
            vk_url: DEFAULT_VK_URL.to_string(),
            add: PathBuf::from("."),
            functions: PathBuf::from("."),
            rules: PathBuf::from("."),
            failed_only: true,
        }
    }
}

impl Config {
    /// A full report inverts into failed-only reporting.
    pub fn with_full_report(mut self, full_report: bool) -> Self {
        self.failed_only = !full_report;
        self
    }

    /// The orchestrators call this before touching the network.
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(StyleguideError::MissingApiKey),
        }
    }

    /// Base URL for the API host. A bare host gets the https scheme;
    /// a host that already carries one is used verbatim.
    pub fn base_url(&self) -> String {
        if self.api_host.contains("://") {
            self.api_host.clone()
        } else {
            format!("https://{}", self.api_host)
        }
    }
}
