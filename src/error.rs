/// Error types for argument validation and device interaction
use std::io;

/// Problems with the command line, reported with the `Error:` prefix
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("Error: host name or ip must be supplied.")]
    MissingHost,

    #[error("Error: type option {0} is not allowed")]
    InvalidKind(String),

    #[error("Error: timeout option {0} is not allowed, use at least 1 second")]
    InvalidTimeout(u64),

    #[error("Error: ok-note option {0} is not allowed")]
    InvalidOkNote(String),

    #[error("Error: {0}")]
    Arguments(String),
}

/// Failures while talking to the device, all surfaced as UNKNOWN
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Cannot interact with NetBotz SNMP Agent")]
    NoSensors,

    #[error("cannot open SNMP session to {host}: {source}")]
    Session {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("SNMP request for {oid} failed: {reason}")]
    Request { oid: String, reason: String },

    #[error("no value returned for {oid}")]
    EmptyResponse { oid: String },

    #[error("sensor {index}: {variable} has invalid value '{value}'")]
    InvalidValue {
        index: String,
        variable: &'static str,
        value: String,
    },
}
