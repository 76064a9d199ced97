pub mod enumerator;
pub mod fetcher;

use log::info;
use std::collections::BTreeMap;

use crate::agent::{SnmpClient, ThresholdColumns};
use crate::error::ProbeError;
use crate::models::{MeasurementKind, SensorReading};

pub use enumerator::discover_sensors;
pub use fetcher::fetch_readings;

/// Discover communicating sensors and read them for one measurement kind
pub fn collect<C: SnmpClient + ?Sized>(
    client: &mut C,
    kind: MeasurementKind,
) -> Result<BTreeMap<u32, SensorReading>, ProbeError> {
    let indices = discover_sensors(client)?;
    let readings = fetch_readings(client, &indices, ThresholdColumns::for_kind(kind))?;

    info!("Collected {} {:?} readings", readings.len(), kind);
    Ok(readings)
}
