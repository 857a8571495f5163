use std::collections::HashSet;
use std::path::Path;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{CheckError, ConfigError};
use crate::model::NewUser;
use crate::routes;
use crate::session::{BaseSession, RequestOptions};

/// Reads the batch of seed users from a JSON array file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not an array of users,
/// or is empty.
pub fn load_seed_users(path: &Path) -> Result<Vec<NewUser>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadSeedFile {
        path: path.to_path_buf(),
        source: err,
    })?;
    let users: Vec<NewUser> =
        serde_json::from_str(&content).map_err(|err| ConfigError::ParseSeedFile {
            path: path.to_path_buf(),
            source: err,
        })?;
    if users.is_empty() {
        return Err(ConfigError::EmptySeedFile {
            path: path.to_path_buf(),
        });
    }
    Ok(users)
}

/// POSTs `user` to `path` and returns the server-assigned id.
///
/// Anything but 201 is an error, whatever the body holds. When such a
/// response still names an id, that user is deleted before returning.
///
/// # Errors
///
/// Returns an error on transport failure, a status other than 201, or a body
/// without an integer `id`.
pub async fn create_user(
    session: &BaseSession,
    path: &str,
    user: &NewUser,
) -> Result<i64, CheckError> {
    let options =
        RequestOptions::with_json(user).map_err(|err| CheckError::EncodeBody { source: err })?;
    let response = session.post(path, &options).await?;
    let status = response.status();
    let body = response.bytes().await?;
    let id = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|value| value.get("id").and_then(Value::as_i64));

    if status != StatusCode::CREATED {
        if let Some(id) = id
            && let Err(err) = remove_user(session, id).await
        {
            warn!(id, "Failed to delete user from rejected create: {}", err);
        }
        return Err(CheckError::UnexpectedStatus {
            method: "POST",
            path: path.to_owned(),
            expected: StatusCode::CREATED.as_u16(),
            actual: status.as_u16(),
        });
    }
    id.ok_or_else(|| CheckError::MissingId {
        path: path.to_owned(),
    })
}

/// Deletes user `id`. A user that is already gone counts as removed.
///
/// # Errors
///
/// Returns an error on transport failure or any other non-success status.
pub async fn remove_user(session: &BaseSession, id: i64) -> Result<(), CheckError> {
    let path = routes::user(id);
    let response = session.delete(&path, &RequestOptions::new()).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        debug!(id, "user already removed");
        return Ok(());
    }
    Err(CheckError::UnexpectedStatus {
        method: "DELETE",
        path,
        expected: StatusCode::OK.as_u16(),
        actual: status.as_u16(),
    })
}

/// Users created on the server for the duration of a scope.
#[derive(Debug, Default)]
pub struct SeededUsers {
    ids: Vec<i64>,
}

impl SeededUsers {
    /// POSTs every record to the collection endpoint and captures the ids.
    ///
    /// When a record fails, the users created so far are deleted before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::SeedUnavailable`] when any record cannot be
    /// created.
    pub async fn setup(session: &BaseSession, records: &[NewUser]) -> Result<Self, CheckError> {
        let mut seeded = Self {
            ids: Vec::with_capacity(records.len()),
        };
        for (index, record) in records.iter().enumerate() {
            match create_user(session, routes::USERS, record).await {
                Ok(id) => seeded.ids.push(id),
                Err(err) => {
                    if let Err(cleanup) = seeded.teardown(session).await {
                        warn!("Partial seed cleanup failed: {}", cleanup);
                    }
                    return Err(CheckError::SeedUnavailable {
                        reason: format!("record {}: {}", index, err),
                    });
                }
            }
        }
        info!(count = seeded.ids.len(), "seeded users");
        Ok(seeded)
    }

    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.ids.iter().collect::<HashSet<_>>().len()
    }

    /// Deletes every captured id, continuing past failures.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Cleanup`] listing every id that could not be
    /// deleted.
    pub async fn teardown(&self, session: &BaseSession) -> Result<(), CheckError> {
        let mut failures = Vec::new();
        for id in &self.ids {
            if let Err(err) = remove_user(session, *id).await {
                warn!(id = *id, "Failed to delete seeded user: {}", err);
                failures.push(format!("{}: {}", id, err));
            }
        }
        if failures.is_empty() {
            info!(count = self.ids.len(), "removed seeded users");
            return Ok(());
        }
        Err(CheckError::Cleanup {
            count: failures.len(),
            details: failures.join("; "),
        })
    }
}
