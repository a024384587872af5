/// Storage key under which the consent flag is persisted.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

/// Client-local persistent storage for the cookie-consent flag. Read once at
/// mount, written once on accept.
pub trait ConsentStore: Send + Sync {
    fn is_accepted(&self) -> Result<bool, anyhow::Error>;

    fn record_acceptance(&self) -> Result<(), anyhow::Error>;
}
