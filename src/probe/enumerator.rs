/// Discovery of communicating sensors on the device
use log::{debug, info, warn};

use crate::agent::oids::{COMMS_ESTABLISHED, PROBE_COMM_STATUS, PROBE_INDEX};
use crate::agent::SnmpClient;
use crate::error::ProbeError;

/// Find the indices of sensors currently talking to the device
///
/// Walks the probe index column, then keeps each index whose communication
/// status is "established".
///
/// # Arguments
/// * `client` - SNMP session bound to the device
///
/// # Returns
/// Indices in ascending order, or `ProbeError::NoSensors` when the walk
/// fails or returns nothing at all
pub fn discover_sensors<C: SnmpClient + ?Sized>(client: &mut C) -> Result<Vec<u32>, ProbeError> {
    // An agent that does not answer the walk is reported like an empty one
    let raw_indices = match client.walk(&PROBE_INDEX.oid()) {
        Ok(raw_indices) => raw_indices,
        Err(e) => {
            warn!("Sensor discovery failed: {}", e);
            return Err(ProbeError::NoSensors);
        }
    };

    if raw_indices.is_empty() {
        return Err(ProbeError::NoSensors);
    }

    let mut active = Vec::with_capacity(raw_indices.len());
    for raw in raw_indices {
        let index = parse_index(&raw)?;
        let status = client.get(&PROBE_COMM_STATUS.oid().instance(index))?;

        if status.trim() == COMMS_ESTABLISHED {
            active.push(index);
        } else {
            warn!("Skipping sensor {}: communication status {}", index, status);
        }
    }

    active.sort_unstable();
    active.dedup();

    info!("Discovered {} communicating sensors", active.len());
    debug!("Active sensor indices: {:?}", active);
    Ok(active)
}

fn parse_index(raw: &str) -> Result<u32, ProbeError> {
    raw.trim().parse().map_err(|_| ProbeError::InvalidValue {
        index: raw.to_string(),
        variable: PROBE_INDEX.name,
        value: raw.to_string(),
    })
}
