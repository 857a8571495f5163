use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `apicheck` binary from the crate root and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_apicheck<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = apicheck_bin()?;
    Command::new(bin)
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("RUST_LOG", "error")
        .env_remove("APICHECK_LOG")
        .env_remove("APICHECK_ENV")
        .env_remove("APICHECK_BASE_URL")
        .output()
        .map_err(|err| format!("run apicheck failed: {}", err))
}

fn apicheck_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_apicheck").map_or_else(
        || Err("CARGO_BIN_EXE_apicheck missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
