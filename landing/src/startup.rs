use std::path::PathBuf;
use std::sync::Arc;

use secrecy::Secret;

use crate::adapters::{LocalConsentStore, SupabaseWaitlistStore};
use crate::configuration::Settings;
use crate::cookie_consent::CookieBanner;
use crate::signup_form::SignupForm;

/// The stateful pieces of the page shell, wired once when the page mounts.
pub struct LandingPage {
    pub signup: SignupForm,
    pub cookie_banner: CookieBanner,
}

impl LandingPage {
    pub fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        // The store client exists even when configuration is incomplete; the
        // form checks completeness before every submission and never uses an
        // unconfigured client.
        let store = SupabaseWaitlistStore::new(
            configuration.store.endpoint.clone().unwrap_or_default(),
            configuration
                .store
                .api_key
                .clone()
                .unwrap_or_else(|| Secret::new(String::new())),
            configuration.store.timeout(),
        )?;
        let signup = SignupForm::new(configuration.store, Arc::new(store));

        let consent_store =
            LocalConsentStore::new(PathBuf::from(&configuration.consent.storage_path));
        let cookie_banner = CookieBanner::mount(Arc::new(consent_store));

        Ok(Self {
            signup,
            cookie_banner,
        })
    }
}
