mod company_size;
mod consent_store;
mod entrant_email;
mod entrant_name;
mod waitlist_entry;
mod waitlist_store;

pub use crate::domain::company_size::CompanySize;
pub use crate::domain::consent_store::{ConsentStore, COOKIE_CONSENT_KEY};
pub use crate::domain::entrant_email::EntrantEmail;
pub use crate::domain::entrant_name::EntrantName;
pub use crate::domain::waitlist_entry::NewWaitlistEntry;
pub use crate::domain::waitlist_store::{WaitlistStore, WaitlistStoreError};
