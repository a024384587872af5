pub mod adapters;
pub mod configuration;
pub mod cookie_consent;
pub mod domain;
pub mod signup_form;
pub mod startup;
pub mod utils;
