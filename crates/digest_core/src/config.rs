use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "digest.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub sample_data_path: String,
    pub clustering_path: String,
    pub summarize_path: String,
    pub success_status_secs: u64,
    pub error_status_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            sample_data_path: "api/sample-data".into(),
            clustering_path: "api/upload".into(),
            summarize_path: "api/summarize".into(),
            success_status_secs: 3,
            error_status_secs: 5,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    base_url: Option<String>,
    sample_data_path: Option<String>,
    clustering_path: Option<String>,
    summarize_path: Option<String>,
    success_status_secs: Option<u64>,
    error_status_secs: Option<u64>,
}

/// Resolved service URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sample_data: Url,
    pub clustering: Url,
    pub summarize: Url,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDurations {
    pub success: Duration,
    pub error: Duration,
}

impl Default for StatusDurations {
    fn default() -> Self {
        Settings::default().status_durations()
    }
}

/// Defaults, then `digest.toml` in the working directory, then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    settings.apply_file(Path::new(SETTINGS_FILE))?;
    settings.apply_env(|name| std::env::var(name).ok());
    Ok(settings)
}

impl Settings {
    pub fn apply_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        self.apply_toml(&raw)
            .with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub fn apply_toml(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw)?;
        if let Some(v) = file_cfg.base_url {
            self.base_url = v;
        }
        if let Some(v) = file_cfg.sample_data_path {
            self.sample_data_path = v;
        }
        if let Some(v) = file_cfg.clustering_path {
            self.clustering_path = v;
        }
        if let Some(v) = file_cfg.summarize_path {
            self.summarize_path = v;
        }
        if let Some(v) = file_cfg.success_status_secs {
            self.success_status_secs = v;
        }
        if let Some(v) = file_cfg.error_status_secs {
            self.error_status_secs = v;
        }
        Ok(())
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup("DIGEST_BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("APP__BASE_URL") {
            self.base_url = v;
        }
        if let Some(v) = lookup("APP__SUCCESS_STATUS_SECS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.success_status_secs = parsed,
                Err(_) => tracing::warn!(value = %v, "ignoring non-numeric APP__SUCCESS_STATUS_SECS"),
            }
        }
        if let Some(v) = lookup("APP__ERROR_STATUS_SECS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.error_status_secs = parsed,
                Err(_) => tracing::warn!(value = %v, "ignoring non-numeric APP__ERROR_STATUS_SECS"),
            }
        }
    }

    /// Endpoint paths resolve below the base URL's own path, so a service
    /// mounted under a prefix keeps it.
    pub fn endpoints(&self) -> anyhow::Result<Endpoints> {
        let mut base = Url::parse(self.base_url.trim())
            .with_context(|| format!("invalid base url '{}'", self.base_url))?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let join = |path: &str| {
            base.join(path.trim_start_matches('/'))
                .with_context(|| format!("invalid endpoint path '{path}' for base '{base}'"))
        };
        Ok(Endpoints {
            sample_data: join(&self.sample_data_path)?,
            clustering: join(&self.clustering_path)?,
            summarize: join(&self.summarize_path)?,
        })
    }

    pub fn status_durations(&self) -> StatusDurations {
        StatusDurations {
            success: Duration::from_secs(self.success_status_secs),
            error: Duration::from_secs(self.error_status_secs),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
