use serde_json::json;

use super::{NewUser, validate_user};
use crate::error::SchemaError;

fn ivanov() -> NewUser {
    NewUser {
        last_name: "Ivanov".to_owned(),
        first_name: "Ivan".to_owned(),
        email: "ivan@example.com".to_owned(),
        avatar: "https://reqres.in/img/faces/8-image.jpg".to_owned(),
    }
}

#[test]
fn validate_user_accepts_reqres_shape() -> Result<(), String> {
    let value = json!({
        "id": 7,
        "email": "michael.lawson@reqres.in",
        "first_name": "Michael",
        "last_name": "Lawson",
        "avatar": "https://reqres.in/img/faces/7-image.jpg"
    });
    let user = validate_user(&value).map_err(|err| format!("validate failed: {}", err))?;
    if user.id != 7 {
        return Err(format!("Unexpected id: {}", user.id));
    }
    if user.last_name != "Lawson" {
        return Err(format!("Unexpected last_name: {}", user.last_name));
    }
    Ok(())
}

#[test]
fn validate_user_rejects_string_id() -> Result<(), String> {
    let value = json!({
        "id": "7",
        "email": "a@b.io",
        "first_name": "A",
        "last_name": "B",
        "avatar": "https://reqres.in/img/faces/7-image.jpg"
    });
    match validate_user(&value) {
        Err(SchemaError::Shape { .. }) => Ok(()),
        other => Err(format!("Expected shape error, got {:?}", other)),
    }
}

#[test]
fn validate_user_rejects_missing_field() -> Result<(), String> {
    let value = json!({
        "id": 1,
        "email": "a@b.io",
        "first_name": "A",
        "avatar": "https://reqres.in/img/faces/7-image.jpg"
    });
    if validate_user(&value).is_ok() {
        return Err("Expected missing last_name to fail".to_owned());
    }
    Ok(())
}

#[test]
fn validate_user_rejects_non_object() -> Result<(), String> {
    match validate_user(&json!([1, 2])) {
        Err(SchemaError::NotAnObject { kind }) if kind == "an array" => Ok(()),
        other => Err(format!("Expected NotAnObject, got {:?}", other)),
    }
}

#[test]
fn validate_user_checks_email_and_avatar() -> Result<(), String> {
    let bad_email = json!({
        "id": 1,
        "email": "not-an-email",
        "first_name": "A",
        "last_name": "B",
        "avatar": "https://reqres.in/img/faces/1-image.jpg"
    });
    if !matches!(
        validate_user(&bad_email),
        Err(SchemaError::InvalidEmail { .. })
    ) {
        return Err("Expected InvalidEmail".to_owned());
    }

    let relative_avatar = json!({
        "id": 1,
        "email": "a@b.io",
        "first_name": "A",
        "last_name": "B",
        "avatar": "/img/faces/1-image.jpg"
    });
    if !matches!(
        validate_user(&relative_avatar),
        Err(SchemaError::InvalidAvatar { .. })
    ) {
        return Err("Expected InvalidAvatar".to_owned());
    }

    let ftp_avatar = json!({
        "id": 1,
        "email": "a@b.io",
        "first_name": "A",
        "last_name": "B",
        "avatar": "ftp://reqres.in/1.jpg"
    });
    if !matches!(
        validate_user(&ftp_avatar),
        Err(SchemaError::UnsupportedAvatarScheme { .. })
    ) {
        return Err("Expected UnsupportedAvatarScheme".to_owned());
    }
    Ok(())
}

#[test]
fn new_user_serializes_in_submission_order() -> Result<(), String> {
    let body = serde_json::to_string(&ivanov()).map_err(|err| format!("encode failed: {}", err))?;
    let expected = r#"{"last_name":"Ivanov","first_name":"Ivan","email":"ivan@example.com","avatar":"https://reqres.in/img/faces/8-image.jpg"}"#;
    if body != expected {
        return Err(format!("Unexpected body: {}", body));
    }
    Ok(())
}

#[test]
fn first_mismatch_reports_changed_field() -> Result<(), String> {
    let submitted = ivanov();
    let value = json!({
        "id": 3,
        "last_name": "Ivanov",
        "first_name": "Petr",
        "email": "ivan@example.com",
        "avatar": "https://reqres.in/img/faces/8-image.jpg"
    });
    let returned = validate_user(&value).map_err(|err| format!("validate failed: {}", err))?;
    match submitted.first_mismatch(&returned) {
        Some(("first_name", "Ivan", "Petr")) => {}
        other => return Err(format!("Unexpected mismatch: {:?}", other)),
    }
    if submitted.matches(&returned) {
        return Err("Expected matches to be false".to_owned());
    }
    Ok(())
}
