use clap::Parser;

use super::types::OutputFormat;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "apicheck",
    version,
    about = "Conformance checks for a users REST API: status codes, schema, and CRUD round-trips."
)]
pub struct CheckArgs {
    /// Environment to run against (resolved through the config file)
    #[arg(long = "env", short = 'e', env = "APICHECK_ENV")]
    pub env: Option<String>,

    /// Base URL of the API; overrides the environment's configured URL
    #[arg(long = "base-url", short = 'u', env = "APICHECK_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to config file (TOML or JSON); defaults to ./apicheck.toml or ./apicheck.json
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// JSON file with the users seeded before the list and lookup checks
    #[arg(long = "seed-file", short = 's')]
    pub seed_file: Option<String>,

    /// Only run checks whose name contains this text
    #[arg(long, short = 'k')]
    pub filter: Option<String>,

    /// Print the selected check names and exit
    #[arg(long)]
    pub list: bool,

    /// Report format
    #[arg(long = "output-format", value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub output_format: OutputFormat,

    /// Enable debug logging, including every request as a curl command
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
