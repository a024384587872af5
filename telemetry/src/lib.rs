mod telemetry;

pub use crate::telemetry::*;
