use clap::Parser;
use tracing::info;

use apicheck::args::{CheckArgs, OutputFormat};
use apicheck::config::{ResolvedTarget, load_config, resolve_target};
use apicheck::error::{AppError, AppResult, SuiteError};
use apicheck::fixtures::load_seed_users;
use apicheck::model::NewUser;
use apicheck::session::BaseSession;
use apicheck::suite::{CheckCase, SuiteReport, run_suite, select};

pub(crate) fn run() -> AppResult<()> {
    let args = CheckArgs::parse();
    crate::logger::init_logging(args.verbose, args.no_color);

    let config = load_config(args.config.as_deref())?;
    let target = resolve_target(&args, config.as_ref()).map_err(AppError::config)?;

    let cases = select(args.filter.as_deref());
    if cases.is_empty() {
        return Err(AppError::suite(SuiteError::NoChecksSelected {
            filter: args.filter.unwrap_or_default(),
        }));
    }

    if args.list {
        for case in &cases {
            println!("{}", case.name);
        }
        return Ok(());
    }

    let seed = load_seed_if_needed(&cases, &target)?;
    info!(environment = %target.environment, base_url = %target.base_url, "target resolved");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(run_checks(&target, &cases, &seed))?;

    print_report(&report, args.output_format)?;

    if report.is_success() {
        Ok(())
    } else {
        Err(AppError::suite(SuiteError::ChecksFailed {
            failed: report.unsuccessful(),
            total: report.total(),
        }))
    }
}

fn load_seed_if_needed(cases: &[CheckCase], target: &ResolvedTarget) -> AppResult<Vec<NewUser>> {
    if !cases.iter().any(|case| case.kind.needs_seed()) {
        return Ok(Vec::new());
    }
    let seed = load_seed_users(&target.seed_file).map_err(AppError::config)?;
    info!(count = seed.len(), path = %target.seed_file.display(), "loaded seed users");
    Ok(seed)
}

async fn run_checks(
    target: &ResolvedTarget,
    cases: &[CheckCase],
    seed: &[NewUser],
) -> AppResult<SuiteReport> {
    let session = BaseSession::new(target.base_url.clone())?;
    let report = run_suite(&session, cases, seed).await;
    session.close();
    Ok(report)
}

fn print_report(report: &SuiteReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in report.text_lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
