/// Aggregation of sensor evaluations into the plugin's output line
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::config::OkNote;
use crate::error::{ProbeError, UsageError};
use crate::evaluator::{evaluate, Evaluation};
use crate::models::{MeasurementKind, SensorReading, ServiceState, Severity};

/// What the plugin prints and how it exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: ServiceState,
    pub message: String,
}

impl Outcome {
    /// Bad or missing arguments
    pub fn usage(err: &UsageError) -> Self {
        Outcome {
            state: ServiceState::Unknown,
            message: err.to_string(),
        }
    }

    /// The device could not be queried
    pub fn failure(err: &ProbeError) -> Self {
        let message = match err {
            ProbeError::NoSensors => format!("{}: {}", ServiceState::Unknown, err),
            other => format!("{}: Unexpected error: {}", ServiceState::Unknown, other),
        };
        Outcome {
            state: ServiceState::Unknown,
            message,
        }
    }

    /// A panic escaped the check; the payload becomes a one-line message
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic".to_string());

        let detail: Vec<&str> = detail.split_whitespace().collect();
        Outcome {
            state: ServiceState::Unknown,
            message: format!("{}: Unexpected error: {}", ServiceState::Unknown, detail.join(" ")),
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.state.exit_code()
    }
}

/// Worst severity across all sensors; an empty set is OK
pub fn overall_severity<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().max().unwrap_or(Severity::Ok)
}

/// Evaluate every reading and render the summary with performance data
///
/// # Arguments
/// * `readings` - Sensor readings keyed by index, rendered in index order
/// * `kind` - Measurement kind, for labels and units
/// * `ok_note` - Whether breached sensors also get the "value is OK" note
///
/// # Returns
/// Outcome with the aggregated state and the single output line
pub fn build_report(
    readings: &BTreeMap<u32, SensorReading>,
    kind: MeasurementKind,
    ok_note: OkNote,
) -> Outcome {
    let evaluated: Vec<(&SensorReading, Evaluation)> = readings
        .values()
        .map(|reading| (reading, evaluate(reading)))
        .collect();

    let severity = overall_severity(evaluated.iter().map(|(_, evaluation)| evaluation.severity));
    let state = ServiceState::from(severity);

    let summary = summary_text(&evaluated, kind, ok_note);
    let perf_data = perf_data_text(&evaluated, kind);

    let line = format!("{}: {} | {}", state, summary, perf_data);
    Outcome {
        state,
        message: trim_tail(&line).to_string(),
    }
}

fn summary_text(
    evaluated: &[(&SensorReading, Evaluation)],
    kind: MeasurementKind,
    ok_note: OkNote,
) -> String {
    let label = kind.label();
    let mut text = String::new();

    for (reading, evaluation) in evaluated {
        let _ = write!(
            text,
            "{} {} test: {}{} ",
            reading.name,
            label,
            reading.value,
            kind.unit()
        );

        if let Some(breach) = evaluation.breach {
            let _ = write!(text, " - The {} value is {}. ", label, breach);
        }

        let show_ok = match ok_note {
            OkNote::Always => true,
            OkNote::Healthy => evaluation.breach.is_none(),
        };
        if show_ok {
            let _ = write!(text, " - The {} value is OK. ", label);
        }
    }

    trim_tail(&text).to_string()
}

fn perf_data_text(evaluated: &[(&SensorReading, Evaluation)], kind: MeasurementKind) -> String {
    let mut text = String::new();

    for (reading, _) in evaluated {
        // value;high;max;max;min - max appears twice, as existing checks emit it
        let _ = write!(
            text,
            "'{} {}'={}{};{};{};{};{}; ",
            reading.name,
            kind.label(),
            reading.value,
            kind.perf_unit(),
            reading.high,
            reading.max,
            reading.max,
            reading.min
        );
    }

    text
}

fn trim_tail(text: &str) -> &str {
    text.trim_end_matches(' ').trim_end_matches(',')
}
