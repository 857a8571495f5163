//! Relative paths of the users API.
use std::fmt::Display;

/// Collection endpoint, used for listing, seeding and the 405 probe.
pub const USERS: &str = "/api/users/";

/// Collection endpoint without the trailing slash, used by the create checks.
/// Servers are not assumed to treat both spellings the same.
pub const USERS_NO_SLASH: &str = "/api/users";

/// Item endpoint for `id`. Any displayable value is accepted so malformed
/// identifiers can be sent verbatim.
pub fn user<I>(id: I) -> String
where
    I: Display,
{
    format!("{}{}", USERS, id)
}
