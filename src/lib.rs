//! NetBotz environmental sensor check.
//!
//! Queries the PowerNet-MIB probe status table over SNMP, compares each
//! communicating sensor's temperature or humidity with the thresholds
//! configured on the device, and renders a monitoring-plugin status line.

pub mod agent;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod probe;
pub mod report;

use log::error;

use agent::SnmpClient;
use config::ProbeConfig;
use report::{build_report, Outcome};

/// Run one check against an open SNMP session
///
/// Device failures never escape as errors; they become an UNKNOWN outcome.
pub fn run_check<C: SnmpClient + ?Sized>(client: &mut C, config: &ProbeConfig) -> Outcome {
    match probe::collect(client, config.kind) {
        Ok(readings) => build_report(&readings, config.kind, config.ok_note),
        Err(e) => {
            error!("Check against {} failed: {}", config.host, e);
            Outcome::failure(&e)
        }
    }
}
