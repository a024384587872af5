use crate::domain::company_size::CompanySize;
use crate::domain::entrant_email::EntrantEmail;
use crate::domain::entrant_name::EntrantName;

/// The payload submitted on a waitlist join attempt. Built fresh for each
/// submission and never mutated after it is handed to the store.
pub struct NewWaitlistEntry {
    pub name: EntrantName,
    pub email: EntrantEmail,
    pub company_size: CompanySize,
}
