use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::time::Duration;

use crate::error::UsageError;
use crate::models::MeasurementKind;

const DEFAULT_PORT: u16 = 161;
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Whether the trailing "value is OK" note follows every sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OkNote {
    /// After every sensor, breached or not
    #[default]
    Always,
    /// Only after sensors within all thresholds
    Healthy,
}

/// Raw command line. Every flag also reads from the environment.
#[derive(Debug, Parser)]
#[command(
    name = "check_netbotz",
    about = "Check NetBotz temperature and humidity sensors over SNMP"
)]
struct Cli {
    /// NetBotz host name or IP address
    #[arg(short = 'H', long, env = "NETBOTZ_HOST")]
    host: Option<String>,

    /// SNMP community name
    #[arg(short, long, env = "NETBOTZ_COMMUNITY", default_value = "public")]
    community: String,

    /// Test type: 'temp' for temperature, 'humid' for humidity
    #[arg(short = 't', long = "type", env = "NETBOTZ_TYPE", default_value = "temp")]
    kind: String,

    /// SNMP agent UDP port
    #[arg(short, long, env = "NETBOTZ_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Seconds to wait for each SNMP response (at least 1)
    #[arg(long, env = "NETBOTZ_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// When to append the "value is OK" note: 'always' or 'healthy'
    #[arg(long, default_value = "always")]
    ok_note: String,

    /// Increase log output on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Everything one probe invocation needs, fixed for its duration
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub host: String,
    pub port: u16,
    pub community: String,
    pub kind: MeasurementKind,
    pub timeout: Duration,
    pub ok_note: OkNote,
    pub verbose: u8,
}

impl ProbeConfig {
    /// Load configuration from `.env`, the environment and process arguments
    pub fn new() -> Result<Self, UsageError> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_args(std::env::args_os())
    }

    /// Build configuration from an explicit argument list
    ///
    /// The first item is the program name. Validation order matches what
    /// operators see today: a missing host is reported before a bad type.
    pub fn from_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                UsageError::Arguments(e.to_string().trim_end().to_string())
            }
            _ => UsageError::Arguments(first_line(&e.to_string())),
        })?;

        let host = match cli.host {
            Some(host) if !host.trim().is_empty() => host.trim().to_string(),
            _ => return Err(UsageError::MissingHost),
        };

        let kind = cli.kind.parse::<MeasurementKind>()?;

        if cli.timeout == 0 {
            return Err(UsageError::InvalidTimeout(cli.timeout));
        }

        let ok_note = match cli.ok_note.as_str() {
            "always" => OkNote::Always,
            "healthy" => OkNote::Healthy,
            other => return Err(UsageError::InvalidOkNote(other.to_string())),
        };

        Ok(ProbeConfig {
            host,
            port: cli.port,
            community: cli.community,
            kind,
            timeout: Duration::from_secs(cli.timeout),
            ok_note,
            verbose: cli.verbose,
        })
    }

    /// Log level for stderr, raised by each `-v`
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

// clap's messages end with a usage block; the plugin prints a single line
fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.trim_start_matches("error: ").trim().to_string()
}
