use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::{NewWaitlistEntry, WaitlistStore, WaitlistStoreError};

/// Postgres error code for a unique-constraint violation, surfaced verbatim
/// by the REST layer when the email already exists.
const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Waitlist store backed by a hosted Supabase project, reached through its
/// PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseWaitlistStore {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

#[derive(serde::Serialize)]
struct WaitlistRecord<'a> {
    name: &'a str,
    email: &'a str,
    company_size: &'a str,
}

#[derive(serde::Deserialize)]
struct PostgrestErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

impl SupabaseWaitlistStore {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the waitlist HTTP client")?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }
}

#[async_trait]
impl WaitlistStore for SupabaseWaitlistStore {
    #[tracing::instrument(name = "Inserting waitlist entry", skip(self, entry))]
    async fn insert_entry(&self, entry: &NewWaitlistEntry) -> Result<(), WaitlistStoreError> {
        let url = format!("{}/rest/v1/waitlist", self.base_url);
        let records = [WaitlistRecord {
            name: entry.name.as_ref(),
            email: entry.email.as_ref(),
            company_size: entry.company_size.as_str(),
        }];

        let response = self
            .http_client
            .post(&url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("Prefer", "return=minimal")
            .json(&records)
            .send()
            .await
            .context("Failed to send the waitlist insert request")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(error) = serde_json::from_str::<PostgrestErrorBody>(&body) {
            if error.code == UNIQUE_VIOLATION_CODE {
                return Err(WaitlistStoreError::DuplicateEmail(error.message));
            }
        }

        Err(WaitlistStoreError::UnexpectedError(anyhow::anyhow!(
            "Waitlist insert failed with status {}: {}",
            status,
            body
        )))
    }
}
