use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::domain::{ConsentStore, COOKIE_CONSENT_KEY};

/// File-backed stand-in for the browser's local storage: a flat string map
/// persisted as JSON at a configurable path.
#[derive(Debug, Clone)]
pub struct LocalConsentStore {
    path: PathBuf,
}

impl LocalConsentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_flags(&self) -> Result<HashMap<String, String>, anyhow::Error> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read consent flags from {}", self.path.display()))?;
        let flags = serde_json::from_str(&content)
            .with_context(|| format!("Consent flag file {} is not valid JSON", self.path.display()))?;

        Ok(flags)
    }

    fn write_flags(&self, flags: &HashMap<String, String>) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create consent directory {}", parent.display())
                })?;
            }
        }

        let content = serde_json::to_string_pretty(flags)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write consent flags to {}", self.path.display()))?;

        Ok(())
    }
}

impl ConsentStore for LocalConsentStore {
    fn is_accepted(&self) -> Result<bool, anyhow::Error> {
        let flags = self.read_flags()?;

        Ok(flags
            .get(COOKIE_CONSENT_KEY)
            .map_or(false, |value| value == "true"))
    }

    fn record_acceptance(&self) -> Result<(), anyhow::Error> {
        let mut flags = self.read_flags()?;
        flags.insert(COOKIE_CONSENT_KEY.to_string(), "true".to_string());

        self.write_flags(&flags)
    }
}
