use std::collections::HashSet;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CheckError, SchemaError};
use crate::model::{NewUser, User};

pub(super) fn expect_status(
    method: &'static str,
    path: &str,
    response: &Response,
    expected: StatusCode,
) -> Result<(), CheckError> {
    let actual = response.status();
    if actual == expected {
        return Ok(());
    }
    Err(CheckError::UnexpectedStatus {
        method,
        path: path.to_owned(),
        expected: expected.as_u16(),
        actual: actual.as_u16(),
    })
}

pub(super) fn expect_fields(expected: &NewUser, actual: &User) -> Result<(), CheckError> {
    match expected.first_mismatch(actual) {
        None => Ok(()),
        Some((field, submitted, returned)) => Err(CheckError::FieldMismatch {
            field,
            expected: submitted.to_owned(),
            actual: returned.to_owned(),
        }),
    }
}

pub(super) fn expect_unique_ids(ids: &[i64]) -> Result<(), CheckError> {
    let unique = ids.iter().collect::<HashSet<_>>().len();
    if unique == ids.len() {
        return Ok(());
    }
    Err(CheckError::DuplicateIds {
        total: ids.len(),
        unique,
    })
}

pub(super) fn id_of(path: &str, body: &Value) -> Result<i64, CheckError> {
    body.get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| CheckError::MissingId {
            path: path.to_owned(),
        })
}

pub(super) fn parse_user(body: &Value) -> Result<User, CheckError> {
    User::deserialize(body)
        .map_err(|err| CheckError::Schema(SchemaError::Shape { source: err }))
}
