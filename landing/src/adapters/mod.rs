mod local_consent_store;
mod supabase_waitlist_store;

pub use crate::adapters::local_consent_store::LocalConsentStore;
pub use crate::adapters::supabase_waitlist_store::SupabaseWaitlistStore;
