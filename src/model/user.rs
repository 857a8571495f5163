use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::SchemaError;

/// A user as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
}

/// The writable part of a user, as submitted on create and patch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewUser {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub avatar: String,
}

impl NewUser {
    /// Returns the first submitted field whose value differs on `user`, as
    /// `(field, submitted, returned)`.
    #[must_use]
    pub fn first_mismatch<'user>(
        &'user self,
        user: &'user User,
    ) -> Option<(&'static str, &'user str, &'user str)> {
        let fields = [
            ("last_name", self.last_name.as_str(), user.last_name.as_str()),
            ("first_name", self.first_name.as_str(), user.first_name.as_str()),
            ("email", self.email.as_str(), user.email.as_str()),
            ("avatar", self.avatar.as_str(), user.avatar.as_str()),
        ];
        fields
            .into_iter()
            .find(|(_, submitted, returned)| submitted != returned)
    }

    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.first_mismatch(user).is_none()
    }
}

/// Validates a JSON value against the user schema.
///
/// # Errors
///
/// Returns an error when the value is not an object, a field is missing or
/// has the wrong type, the email is not address-shaped, or the avatar is not
/// an absolute http(s) URL.
pub fn validate_user(value: &Value) -> Result<User, SchemaError> {
    if !value.is_object() {
        return Err(SchemaError::NotAnObject {
            kind: json_kind(value),
        });
    }
    let user = User::deserialize(value).map_err(|err| SchemaError::Shape { source: err })?;

    if !is_email_shaped(&user.email) {
        return Err(SchemaError::InvalidEmail {
            value: user.email,
        });
    }

    let avatar = Url::parse(&user.avatar).map_err(|err| SchemaError::InvalidAvatar {
        value: user.avatar.clone(),
        source: err,
    })?;
    if !matches!(avatar.scheme(), "http" | "https") {
        return Err(SchemaError::UnsupportedAvatarScheme { value: user.avatar });
    }

    Ok(user)
}

fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
