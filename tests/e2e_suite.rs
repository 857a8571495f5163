
use std::future::Future;
use std::path::PathBuf;

use apicheck::fixtures::load_seed_users;
use apicheck::model::NewUser;
use apicheck::session::BaseSession;
use apicheck::suite::{CheckStatus, SEED_TEARDOWN_CHECK, SuiteReport, catalog, run_suite, select};

use support_api::{Behavior, ServerHandle, spawn_users_api};

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

fn seed_users() -> Result<Vec<NewUser>, String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("users.json");
    load_seed_users(&path).map_err(|err| format!("seed load failed: {}", err))
}

async fn run_against(
    behavior: Behavior,
    filter: Option<&str>,
) -> Result<(SuiteReport, ServerHandle), String> {
    let (url, server) = spawn_users_api(behavior)?;
    let session = BaseSession::new(url).map_err(|err| format!("session failed: {}", err))?;
    let seed = seed_users()?;
    let report = run_suite(&session, &select(filter), &seed).await;
    session.close();
    Ok((report, server))
}

fn status_of(report: &SuiteReport, name: &str) -> Result<CheckStatus, String> {
    report
        .outcome(name)
        .map(|outcome| outcome.status)
        .ok_or_else(|| format!("missing outcome for {}", name))
}

fn describe(report: &SuiteReport) -> String {
    report.text_lines().join("\n")
}

fn live_ids(server: &ServerHandle) -> Vec<i64> {
    server.state().users.keys().copied().collect()
}

#[test]
fn conforming_api_passes_every_check() -> Result<(), String> {
    run_async_test(async {
        let (report, _server) = run_against(Behavior::default(), None).await?;
        if !report.is_success() {
            return Err(format!("Expected success:\n{}", describe(&report)));
        }
        if report.total() != catalog().len() {
            return Err(format!("Expected one outcome per check:\n{}", describe(&report)));
        }
        Ok(())
    })
}

#[test]
fn suite_removes_everything_it_created() -> Result<(), String> {
    run_async_test(async {
        let (report, server) = run_against(Behavior::default(), None).await?;
        if !report.is_success() {
            return Err(format!("Expected success:\n{}", describe(&report)));
        }
        let live = live_ids(&server);
        if !live.is_empty() {
            return Err(format!("Users left behind: {:?}", live));
        }
        let seeded = seed_users()?.len();
        let deleted = server.state().deleted.clone();
        // seed batch plus the users created by post, delete and patch
        if deleted.len() != seeded.saturating_add(3) {
            return Err(format!("Unexpected deletions: {:?}", deleted));
        }
        Ok(())
    })
}

#[test]
fn malformed_ids_answered_with_404_fail_only_those_checks() -> Result<(), String> {
    run_async_test(async {
        let (report, server) = run_against(
            Behavior {
                malformed_id_status: 404,
                ..Behavior::default()
            },
            None,
        ).await?;
        for name in ["user_invalid[-1]", "user_invalid[0]", "user_invalid[fafaf]"] {
            if status_of(&report, name)? != CheckStatus::Failed {
                return Err(format!("Expected {} to fail:\n{}", name, describe(&report)));
            }
        }
        if report.unsuccessful() != 3 {
            return Err(format!("Expected exactly 3 failures:\n{}", describe(&report)));
        }
        let message = report
            .outcome("user_invalid[0]")
            .and_then(|outcome| outcome.message.clone())
            .unwrap_or_default();
        if !message.contains("expected status 422, got 404") {
            return Err(format!("Unexpected message: {}", message));
        }
        if !live_ids(&server).is_empty() {
            return Err("Seed users were not removed".to_owned());
        }
        Ok(())
    })
}

#[test]
fn duplicate_listing_is_detected() -> Result<(), String> {
    run_async_test(async {
        let (report, _server) = run_against(
            Behavior {
                duplicate_listing: true,
                ..Behavior::default()
            },
            None,
        ).await?;
        if status_of(&report, "users_no_duplicates")? != CheckStatus::Failed {
            return Err(format!("Expected duplicate detection:\n{}", describe(&report)));
        }
        if status_of(&report, "users_list_schema")? != CheckStatus::Passed {
            return Err(format!("Schema check should pass:\n{}", describe(&report)));
        }
        Ok(())
    })
}

#[test]
fn seed_failure_errors_seeded_checks_and_runs_the_rest() -> Result<(), String> {
    run_async_test(async {
        let (report, _server) = run_against(
            Behavior {
                create_status: 500,
                ..Behavior::default()
            },
            None,
        ).await?;
        for name in [
            "users_list_schema",
            "users_no_duplicates",
            "seed_ids_unique",
            "user_by_id",
        ] {
            if status_of(&report, name)? != CheckStatus::Errored {
                return Err(format!("Expected {} to error:\n{}", name, describe(&report)));
            }
        }
        for name in ["post_user", "delete_user", "patch_user"] {
            if status_of(&report, name)? != CheckStatus::Failed {
                return Err(format!("Expected {} to fail:\n{}", name, describe(&report)));
            }
        }
        for name in [
            "user_nonexistent[13]",
            "user_invalid[fafaf]",
            "not_allowed_method",
        ] {
            if status_of(&report, name)? != CheckStatus::Passed {
                return Err(format!("Expected {} to pass:\n{}", name, describe(&report)));
            }
        }
        if report.outcome(SEED_TEARDOWN_CHECK).is_some() {
            return Err("No teardown outcome expected without seed users".to_owned());
        }
        Ok(())
    })
}

#[test]
fn filtered_run_without_seeded_checks_does_not_seed() -> Result<(), String> {
    run_async_test(async {
        let (report, server) = run_against(Behavior::default(), Some("user_invalid")).await?;
        if report.total() != 3 || !report.is_success() {
            return Err(format!("Unexpected report:\n{}", describe(&report)));
        }
        let posts = server
            .state()
            .requests
            .iter()
            .filter(|request| request.starts_with("POST "))
            .count();
        if posts != 0 {
            return Err(format!("Expected no seeding, saw {} POSTs", posts));
        }
        Ok(())
    })
}

#[test]
fn seeding_and_create_checks_use_distinct_collection_paths() -> Result<(), String> {
    run_async_test(async {
        let (report, server) = run_against(Behavior::default(), None).await?;
        if !report.is_success() {
            return Err(format!("Expected success:\n{}", describe(&report)));
        }
        let requests = server.state().requests.clone();
        let slash = requests
            .iter()
            .filter(|request| request.as_str() == "POST /api/users/")
            .count();
        let bare = requests
            .iter()
            .filter(|request| request.as_str() == "POST /api/users")
            .count();
        let seeded = seed_users()?.len();
        if slash != seeded || bare != 3 {
            return Err(format!("Unexpected POST split: slash={} bare={}", slash, bare));
        }
        Ok(())
    })
}

#[test]
fn creates_answered_with_200_are_rejected_and_removed() -> Result<(), String> {
    run_async_test(async {
        let (report, server) = run_against(
            Behavior {
                create_status: 200,
                ..Behavior::default()
            },
            None,
        )
        .await?;
        for name in ["users_list_schema", "seed_ids_unique", "user_by_id"] {
            if status_of(&report, name)? != CheckStatus::Errored {
                return Err(format!("Expected {} to error:\n{}", name, describe(&report)));
            }
        }
        for name in ["post_user", "delete_user", "patch_user"] {
            let message = report
                .outcome(name)
                .and_then(|outcome| outcome.message.clone())
                .unwrap_or_default();
            if !message.contains("expected status 201, got 200") {
                return Err(format!("Unexpected {} message: {}", name, message));
            }
        }
        let live = live_ids(&server);
        if !live.is_empty() {
            return Err(format!("Users left behind: {:?}", live));
        }
        Ok(())
    })
}

#[test]
fn plain_text_create_failure_reports_the_status() -> Result<(), String> {
    run_async_test(async {
        let (report, _server) = run_against(
            Behavior {
                create_status: 500,
                plain_text_errors: true,
                ..Behavior::default()
            },
            Some("post_user"),
        )
        .await?;
        if status_of(&report, "post_user")? != CheckStatus::Failed {
            return Err(format!("Expected post_user to fail:\n{}", describe(&report)));
        }
        let message = report
            .outcome("post_user")
            .and_then(|outcome| outcome.message.clone())
            .unwrap_or_default();
        if !message.contains("POST /api/users: expected status 201, got 500") {
            return Err(format!("Unexpected message: {}", message));
        }
        Ok(())
    })
}
