/// Threshold classification of a single sensor reading
use std::fmt;

use crate::models::{SensorReading, Severity};

/// Which device threshold a reading crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    BelowMinimum,
    BelowLow,
    AboveHigh,
    AboveMaximum,
}

impl Breach {
    pub fn severity(self) -> Severity {
        match self {
            Breach::BelowMinimum | Breach::AboveMaximum => Severity::Critical,
            Breach::BelowLow | Breach::AboveHigh => Severity::Warning,
        }
    }
}

impl fmt::Display for Breach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Breach::BelowMinimum => "LOWER than minimum allowed treshold",
            Breach::BelowLow => "LOWER than allowed LOW treshold",
            Breach::AboveHigh => "HIGHER than allowed HIGH treshold",
            Breach::AboveMaximum => "HIGHER than allowed MAX treshold",
        };
        f.write_str(text)
    }
}

/// Outcome of checking one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub severity: Severity,
    pub breach: Option<Breach>,
}

/// Classify a reading against its own thresholds
///
/// Values are truncated to whole units before comparing, since the device
/// reports thresholds in whole units. Checks run in a fixed order and the
/// first match wins, so degenerate thresholds (min above max) resolve to the
/// minimum check. The device is expected to keep min <= low <= high <= max
/// but nothing here relies on it.
pub fn evaluate(reading: &SensorReading) -> Evaluation {
    let value = truncate(reading.value);

    let breach = if value <= truncate(reading.min) {
        Some(Breach::BelowMinimum)
    } else if value <= truncate(reading.low) {
        Some(Breach::BelowLow)
    } else if value >= truncate(reading.high) {
        Some(Breach::AboveHigh)
    } else if value >= truncate(reading.max) {
        Some(Breach::AboveMaximum)
    } else {
        None
    };

    Evaluation {
        severity: breach.map(Breach::severity).unwrap_or(Severity::Ok),
        breach,
    }
}

fn truncate(value: f64) -> i64 {
    // `as` truncates toward zero and saturates at the i64 range
    value as i64
}
