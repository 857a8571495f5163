/// Ids that are well formed but must not exist on the server.
pub const NONEXISTENT_IDS: [i64; 1] = [13];

/// Ids the server must reject as unprocessable before any lookup.
pub const INVALID_IDS: [&str; 3] = ["-1", "0", "fafaf"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckKind {
    /// `GET /api/users/` is 200 and every element matches the user schema.
    UsersListSchema,
    /// Listed ids contain no repeats.
    UsersNoDuplicates,
    /// Every seeded user received a distinct id.
    SeedIdsUnique,
    /// First and last seeded users can be fetched by id.
    UserById,
    UserNonexistent(i64),
    UserInvalid(&'static str),
    PostUser,
    DeleteUser,
    PatchUser,
    /// `DELETE` on the collection is 405.
    NotAllowedMethod,
}

impl CheckKind {
    /// Whether the check reads the suite-scoped seed users.
    #[must_use]
    pub const fn needs_seed(&self) -> bool {
        matches!(
            self,
            CheckKind::UsersListSchema
                | CheckKind::UsersNoDuplicates
                | CheckKind::SeedIdsUnique
                | CheckKind::UserById
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCase {
    pub name: String,
    pub kind: CheckKind,
}

impl CheckCase {
    fn new(name: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Every check, in execution order.
#[must_use]
pub fn catalog() -> Vec<CheckCase> {
    let mut cases = vec![
        CheckCase::new("users_list_schema", CheckKind::UsersListSchema),
        CheckCase::new("users_no_duplicates", CheckKind::UsersNoDuplicates),
        CheckCase::new("seed_ids_unique", CheckKind::SeedIdsUnique),
        CheckCase::new("user_by_id", CheckKind::UserById),
    ];
    cases.extend(NONEXISTENT_IDS.iter().map(|id| {
        CheckCase::new(
            format!("user_nonexistent[{}]", id),
            CheckKind::UserNonexistent(*id),
        )
    }));
    cases.extend(INVALID_IDS.iter().map(|id| {
        CheckCase::new(format!("user_invalid[{}]", id), CheckKind::UserInvalid(*id))
    }));
    cases.extend([
        CheckCase::new("post_user", CheckKind::PostUser),
        CheckCase::new("delete_user", CheckKind::DeleteUser),
        CheckCase::new("patch_user", CheckKind::PatchUser),
        CheckCase::new("not_allowed_method", CheckKind::NotAllowedMethod),
    ]);
    cases
}

/// Catalog entries whose name contains `filter`; all of them without one.
#[must_use]
pub fn select(filter: Option<&str>) -> Vec<CheckCase> {
    let cases = catalog();
    match filter {
        Some(filter) => cases
            .into_iter()
            .filter(|case| case.name.contains(filter))
            .collect(),
        None => cases,
    }
}
