use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use telemetry::TelemetrySettings;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub store: StoreSettings,
    pub consent: ConsentSettings,
    pub telemetry: TelemetrySettings,
}

/// Connection details for the hosted waitlist store. The endpoint and api key
/// arrive from the environment and either may be absent; an incomplete pair is
/// a startup-level condition, not a per-submission one.
#[derive(Deserialize, Clone)]
pub struct StoreSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<Secret<String>>,
    pub timeout_milliseconds: u64,
}

#[derive(Deserialize, Clone)]
pub struct ConsentSettings {
    pub storage_path: String,
}

impl StoreSettings {
    /// A submission may only be attempted when both values are present and
    /// non-empty.
    pub fn is_complete(&self) -> bool {
        let has_endpoint = self.endpoint.as_deref().map_or(false, |e| !e.is_empty());
        let has_api_key = self
            .api_key
            .as_ref()
            .map_or(false, |k| !k.expose_secret().is_empty());

        has_endpoint && has_api_key
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");

    let environment_filename = format!("{}.yaml", environment.as_str());

    // Init configuration reader
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_STORE__ENDPOINT=https://xyz.supabase.co` would set `Settings.store.endpoint`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either local or production",
                other
            )),
        }
    }
}
