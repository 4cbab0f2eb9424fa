//! Framework-neutral request capture built on the redactor.
//!
//! This module holds the parts of request logging that are independent of any
//! web framework:
//! - **`config`**: global and per-action logging settings and how they layer
//! - **`claims`**: picking the user id, roles and selected claims of a principal,
//!   plus host-supplied extras through [`AdditionalClaims`]
//! - **`response`**: redacting a JSON response body
//! - **`telemetry`**: collecting all of the above under fixed property names
//!
//! Wiring these into a request pipeline is left to the host application.

mod claims;
mod config;
mod response;
mod telemetry;

pub use claims::{AdditionalClaims, Claim, Principal, UserDetails};
pub use config::{ActionLogConfig, ActionLogSettings};
pub use response::{ResponseBody, UNREADABLE_BODY};
pub use telemetry::{
    ActionTelemetry, ADDITIONAL_CLAIMS, ARGUMENTS, RESPONSE_BODY, USER_CLAIMS, USER_ID,
    USER_ROLES,
};

/// Case-insensitive equality for claim types and configured names.
fn eq_ignore_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}
