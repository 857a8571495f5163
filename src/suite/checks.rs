use rand::thread_rng;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::CheckError;
use crate::fixtures::{
    SeededUsers, create_user, random_first_name, random_user, remove_user, with_cleanup,
};
use crate::model::{NewUser, User, validate_user};
use crate::routes;
use crate::session::{BaseSession, RequestOptions};

use super::assertions::{expect_fields, expect_status, expect_unique_ids, id_of, parse_user};
use super::catalog::CheckKind;

pub(super) struct CheckContext<'ctx> {
    pub(super) session: &'ctx BaseSession,
    pub(super) seeded: Option<&'ctx SeededUsers>,
}

impl CheckContext<'_> {
    fn seeded(&self) -> Result<&SeededUsers, CheckError> {
        self.seeded.ok_or_else(|| CheckError::SeedUnavailable {
            reason: "seed fixture was not set up".to_owned(),
        })
    }
}

pub(super) async fn run_check(kind: &CheckKind, ctx: &CheckContext<'_>) -> Result<(), CheckError> {
    match kind {
        CheckKind::UsersListSchema => users_list_schema(ctx.session).await,
        CheckKind::UsersNoDuplicates => users_no_duplicates(ctx.session).await,
        CheckKind::SeedIdsUnique => seed_ids_unique(ctx.seeded()?),
        CheckKind::UserById => user_by_id(ctx.session, ctx.seeded()?).await,
        CheckKind::UserNonexistent(id) => {
            expect_lookup_status(ctx.session, &routes::user(id), StatusCode::NOT_FOUND).await
        }
        CheckKind::UserInvalid(id) => {
            expect_lookup_status(
                ctx.session,
                &routes::user(id),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await
        }
        CheckKind::PostUser => post_user(ctx.session).await,
        CheckKind::DeleteUser => delete_user(ctx.session).await,
        CheckKind::PatchUser => patch_user(ctx.session).await,
        CheckKind::NotAllowedMethod => not_allowed_method(ctx.session).await,
    }
}

async fn list_users(session: &BaseSession) -> Result<Vec<Value>, CheckError> {
    let response = session.get(routes::USERS, &RequestOptions::new()).await?;
    expect_status("GET", routes::USERS, &response, StatusCode::OK)?;
    match response.json::<Value>().await? {
        Value::Array(users) => Ok(users),
        _ => Err(CheckError::NotAList {
            path: routes::USERS.to_owned(),
        }),
    }
}

async fn fetch_user(session: &BaseSession, id: i64) -> Result<Value, CheckError> {
    let path = routes::user(id);
    let response = session.get(&path, &RequestOptions::new()).await?;
    expect_status("GET", &path, &response, StatusCode::OK)?;
    Ok(response.json().await?)
}

async fn users_list_schema(session: &BaseSession) -> Result<(), CheckError> {
    let users = list_users(session).await?;
    for (index, user) in users.iter().enumerate() {
        validate_user(user)
            .map_err(|err| CheckError::ListElementSchema { index, source: err })?;
    }
    Ok(())
}

async fn users_no_duplicates(session: &BaseSession) -> Result<(), CheckError> {
    let users = list_users(session).await?;
    let ids = users
        .iter()
        .map(|user| id_of(routes::USERS, user))
        .collect::<Result<Vec<_>, _>>()?;
    expect_unique_ids(&ids)
}

fn seed_ids_unique(seeded: &SeededUsers) -> Result<(), CheckError> {
    let expected = seeded.ids().len();
    let unique = seeded.unique_count();
    if unique == expected {
        return Ok(());
    }
    Err(CheckError::SeedCountMismatch { expected, unique })
}

async fn user_by_id(session: &BaseSession, seeded: &SeededUsers) -> Result<(), CheckError> {
    let (Some(first), Some(last)) = (seeded.ids().first(), seeded.ids().last()) else {
        return Err(CheckError::SeedEmpty);
    };
    for id in [*first, *last] {
        let body = fetch_user(session, id).await?;
        validate_user(&body)?;
    }
    Ok(())
}

async fn expect_lookup_status(
    session: &BaseSession,
    path: &str,
    expected: StatusCode,
) -> Result<(), CheckError> {
    let response = session.get(path, &RequestOptions::new()).await?;
    expect_status("GET", path, &response, expected)
}

async fn post_user(session: &BaseSession) -> Result<(), CheckError> {
    let user = random_user(&mut thread_rng());
    let id = create_user(session, routes::USERS_NO_SLASH, &user).await?;

    with_cleanup(
        async {
            let fetched = parse_user(&fetch_user(session, id).await?)?;
            expect_fields(&user, &fetched)
        },
        remove_user(session, id),
    )
    .await
}

async fn delete_user(session: &BaseSession) -> Result<(), CheckError> {
    let user = random_user(&mut thread_rng());
    let id = create_user(session, routes::USERS_NO_SLASH, &user).await?;
    let path = routes::user(id);

    with_cleanup(
        async {
            let response = session.delete(&path, &RequestOptions::new()).await?;
            expect_status("DELETE", &path, &response, StatusCode::OK)?;
            let response = session.get(&path, &RequestOptions::new()).await?;
            expect_status("GET", &path, &response, StatusCode::NOT_FOUND)
        },
        remove_user(session, id),
    )
    .await
}

async fn patch_user(session: &BaseSession) -> Result<(), CheckError> {
    let mut user = random_user(&mut thread_rng());
    let id = create_user(session, routes::USERS_NO_SLASH, &user).await?;
    user.first_name = random_first_name(&mut thread_rng());
    let path = routes::user(id);

    with_cleanup(
        async {
            let patched = patch_full(session, &path, &user).await?;
            expect_fields(&user, &patched)
        },
        remove_user(session, id),
    )
    .await
}

async fn patch_full(
    session: &BaseSession,
    path: &str,
    user: &NewUser,
) -> Result<User, CheckError> {
    let options =
        RequestOptions::with_json(user).map_err(|err| CheckError::EncodeBody { source: err })?;
    let response = session.patch(path, &options).await?;
    expect_status("PATCH", path, &response, StatusCode::OK)?;

    let response = session.get(path, &RequestOptions::new()).await?;
    expect_status("GET", path, &response, StatusCode::OK)?;
    parse_user(&response.json().await?)
}

async fn not_allowed_method(session: &BaseSession) -> Result<(), CheckError> {
    let response = session.delete(routes::USERS, &RequestOptions::new()).await?;
    expect_status(
        "DELETE",
        routes::USERS,
        &response,
        StatusCode::METHOD_NOT_ALLOWED,
    )
}
