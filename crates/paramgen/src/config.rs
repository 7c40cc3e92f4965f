use std::env;

use clap::{ArgAction, Parser};

use crate::error::ConfigError;

/// Table scanned when a request does not name one.
pub const DEFAULT_TABLE_NAME: &str = "argocd";

/// Port used when neither the flag nor the environment sets one.
pub const DEFAULT_LISTENING_PORT: &str = "8080";

/// Overrides `--listening-port` when set.
pub const LISTENING_PORT_ENV: &str = "LISTENING_PORT";

/// Long flags that are also accepted with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "debug",
    "ddb-table-name",
    "listening-port",
    "endpoint-url",
    "redact-payloads",
];

/// paramgen - Serve DynamoDB table scans to a parameter generator plugin
#[derive(Parser, Debug)]
#[command(name = "paramgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug mode
    #[arg(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub debug: bool,

    /// DynamoDB table scanned when a request carries no override
    #[arg(long, default_value = DEFAULT_TABLE_NAME, env = "DDB_TABLE_NAME")]
    pub ddb_table_name: String,

    /// Listening port for the web server (LISTENING_PORT takes precedence)
    #[arg(long, default_value = DEFAULT_LISTENING_PORT)]
    pub listening_port: String,

    /// Custom DynamoDB endpoint URL (for local DynamoDB)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Log the number of returned items instead of their contents
    #[arg(
        long,
        env = "REDACT_PAYLOADS",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set
    )]
    pub redact_payloads: bool,
}

impl Cli {
    /// Parses the process arguments, accepting `-flag` as well as `--flag`.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_flag_prefixes(env::args()))
    }
}

/// Rewrites single-dash long flags (`-ddb-table-name=x`) to clap's
/// double-dash form. The program name and unknown arguments are untouched.
pub fn normalize_flag_prefixes<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .enumerate()
        .map(|(idx, arg)| {
            if idx == 0 {
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        format!("-{arg}")
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug: bool,
    /// Default table for requests without an override.
    pub table_name: String,
    pub listening_port: u16,
    pub endpoint_url: Option<String>,
    pub redact_payloads: bool,
}

impl Config {
    /// Resolve configuration from parsed flags and the process environment.
    pub fn from_env(cli: Cli) -> Result<Self, ConfigError> {
        Self::resolve(cli, env::var(LISTENING_PORT_ENV).ok())
    }

    /// Resolve configuration from parsed flags and an explicit
    /// `LISTENING_PORT` value.
    ///
    /// A non-empty `env_listening_port` replaces the flag value.
    pub fn resolve(cli: Cli, env_listening_port: Option<String>) -> Result<Self, ConfigError> {
        if cli.ddb_table_name.is_empty() {
            return Err(ConfigError::EmptyTableName);
        }

        let port = env_listening_port
            .filter(|port| !port.is_empty())
            .unwrap_or(cli.listening_port);
        let listening_port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        Ok(Self {
            debug: cli.debug,
            table_name: cli.ddb_table_name,
            listening_port,
            endpoint_url: cli.endpoint_url.filter(|url| !url.is_empty()),
            redact_payloads: cli.redact_payloads,
        })
    }
}
