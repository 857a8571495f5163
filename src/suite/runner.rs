use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use chrono::Utc;
use futures_util::FutureExt;
use tracing::{error, info};

use crate::error::CheckError;
use crate::fixtures::{SeededUsers, guarded};
use crate::model::NewUser;
use crate::session::BaseSession;

use super::catalog::CheckCase;
use super::checks::{CheckContext, run_check};
use super::report::{CheckOutcome, CheckStatus, SuiteReport};

/// Outcome name used when deleting the seed users fails.
pub const SEED_TEARDOWN_CHECK: &str = "teardown[seed_users]";

enum SeedState<'seed> {
    NotNeeded,
    Ready(&'seed SeededUsers),
    Unavailable(String),
}

/// Runs `cases` in order against `session`.
///
/// When any case needs seed data, `seed` is created once before the first
/// case and deleted after the last one, even if a case panics. A failing case
/// never stops the run.
pub async fn run_suite(
    session: &BaseSession,
    cases: &[CheckCase],
    seed: &[NewUser],
) -> SuiteReport {
    let started_at = Utc::now().to_rfc3339();
    let start = Instant::now();
    info!(checks = cases.len(), base_url = %session.base_url(), "starting suite");

    let needs_seed = cases.iter().any(|case| case.kind.needs_seed());
    let outcomes = if needs_seed {
        match SeededUsers::setup(session, seed).await {
            Ok(seeded) => {
                let (mut outcomes, teardown) = guarded(
                    run_cases(session, cases, &SeedState::Ready(&seeded)),
                    seeded.teardown(session),
                )
                .await;
                if let Err(err) = teardown {
                    error!("Seed teardown failed: {}", err);
                    outcomes.push(CheckOutcome {
                        name: SEED_TEARDOWN_CHECK.to_owned(),
                        status: CheckStatus::Failed,
                        message: Some(err.to_string()),
                        elapsed_ms: 0,
                    });
                }
                outcomes
            }
            Err(err) => {
                error!("Seed setup failed: {}", err);
                run_cases(session, cases, &SeedState::Unavailable(err.to_string())).await
            }
        }
    } else {
        run_cases(session, cases, &SeedState::NotNeeded).await
    };

    let report = SuiteReport {
        base_url: session.base_url().to_owned(),
        started_at,
        elapsed_ms: elapsed_ms(start),
        outcomes,
    };
    info!(
        passed = report.count(CheckStatus::Passed),
        total = report.total(),
        "suite finished"
    );
    report
}

async fn run_cases(
    session: &BaseSession,
    cases: &[CheckCase],
    seed: &SeedState<'_>,
) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::with_capacity(cases.len());
    for case in cases {
        outcomes.push(run_case(session, case, seed).await);
    }
    outcomes
}

async fn run_case(
    session: &BaseSession,
    case: &CheckCase,
    seed: &SeedState<'_>,
) -> CheckOutcome {
    let start = Instant::now();
    let seeded = match seed {
        SeedState::Ready(seeded) => Some(*seeded),
        SeedState::Unavailable(reason) if case.kind.needs_seed() => {
            error!(check = %case.name, "Skipped: seed fixture unavailable");
            return CheckOutcome {
                name: case.name.clone(),
                status: CheckStatus::Errored,
                message: Some(reason.clone()),
                elapsed_ms: 0,
            };
        }
        SeedState::Unavailable(_) | SeedState::NotNeeded => None,
    };

    let ctx = CheckContext { session, seeded };
    let result = AssertUnwindSafe(run_check(&case.kind, &ctx))
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| {
            Err(CheckError::Panicked {
                message: panic_message(payload.as_ref()),
            })
        });

    let elapsed_ms = elapsed_ms(start);
    match result {
        Ok(()) => {
            info!(check = %case.name, elapsed_ms, "passed");
            CheckOutcome {
                name: case.name.clone(),
                status: CheckStatus::Passed,
                message: None,
                elapsed_ms,
            }
        }
        Err(err) => {
            error!(check = %case.name, elapsed_ms, "failed: {}", err);
            CheckOutcome {
                name: case.name.clone(),
                status: CheckStatus::Failed,
                message: Some(err.to_string()),
                elapsed_ms,
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
