use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;

/// Which physical quantity the probe checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasurementKind {
    #[default]
    Temperature,
    Humidity,
}

impl MeasurementKind {
    /// Name used in the summary and perf-data labels.
    ///
    /// The spelling matches what existing NetBotz checks emit, so dashboards
    /// keyed on the label keep working.
    pub fn label(self) -> &'static str {
        match self {
            MeasurementKind::Temperature => "Tempratue",
            MeasurementKind::Humidity => "Humidity",
        }
    }

    /// Unit appended to values in the human-readable summary
    pub fn unit(self) -> &'static str {
        match self {
            MeasurementKind::Temperature => "C",
            MeasurementKind::Humidity => "% RH",
        }
    }

    /// Unit appended to values in performance data
    pub fn perf_unit(self) -> &'static str {
        match self {
            MeasurementKind::Temperature => "",
            MeasurementKind::Humidity => "%",
        }
    }
}

impl FromStr for MeasurementKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temp" => Ok(MeasurementKind::Temperature),
            "humid" => Ok(MeasurementKind::Humidity),
            other => Err(UsageError::InvalidKind(other.to_string())),
        }
    }
}

/// One communicating sensor with its reading and device-side thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub index: u32,
    pub name: String,
    pub value: f64,
    pub low: f64,
    pub high: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-sensor classification, ordered so the worst one wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    #[default]
    Ok,
    Warning,
    Critical,
}

/// Final plugin state and its exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl From<Severity> for ServiceState {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => ServiceState::Ok,
            Severity::Warning => ServiceState::Warning,
            Severity::Critical => ServiceState::Critical,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(text)
    }
}
