//! User resource types and schema validation.
mod user;

#[cfg(test)]
mod tests;

pub use user::{NewUser, User, validate_user};
