/// Reading and threshold retrieval for discovered sensors
use log::debug;
use std::collections::BTreeMap;

use crate::agent::oids::{Column, ThresholdColumns, PROBE_NAME};
use crate::agent::SnmpClient;
use crate::error::ProbeError;
use crate::models::SensorReading;

/// Fetch name, value and thresholds for every index
///
/// A failed or unparsable read for any sensor fails the whole fetch.
///
/// # Arguments
/// * `client` - SNMP session bound to the device
/// * `indices` - Communicating sensor indices
/// * `columns` - Value and threshold columns for the measurement kind
///
/// # Returns
/// Readings keyed by sensor index
pub fn fetch_readings<C: SnmpClient + ?Sized>(
    client: &mut C,
    indices: &[u32],
    columns: &ThresholdColumns,
) -> Result<BTreeMap<u32, SensorReading>, ProbeError> {
    let mut readings = BTreeMap::new();

    for &index in indices {
        let reading = fetch_reading(client, index, columns)?;
        debug!(
            "Sensor {} '{}': value={} low={} high={} min={} max={}",
            index, reading.name, reading.value, reading.low, reading.high, reading.min, reading.max
        );
        readings.insert(index, reading);
    }

    Ok(readings)
}

fn fetch_reading<C: SnmpClient + ?Sized>(
    client: &mut C,
    index: u32,
    columns: &ThresholdColumns,
) -> Result<SensorReading, ProbeError> {
    let name = client.get(&PROBE_NAME.oid().instance(index))?;

    // Reads are issued value, high, low, max, min
    let value = read_number(client, index, &columns.value)?;
    let high = read_number(client, index, &columns.high)?;
    let low = read_number(client, index, &columns.low)?;
    let max = read_number(client, index, &columns.max)?;
    let min = read_number(client, index, &columns.min)?;

    Ok(SensorReading {
        index,
        name: name.trim().to_string(),
        value,
        low,
        high,
        min,
        max,
    })
}

fn read_number<C: SnmpClient + ?Sized>(
    client: &mut C,
    index: u32,
    column: &Column,
) -> Result<f64, ProbeError> {
    let raw = client.get(&column.oid().instance(index))?;

    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(ProbeError::InvalidValue {
            index: index.to_string(),
            variable: column.name,
            value: raw,
        }),
    }
}
