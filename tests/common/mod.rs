//! In-memory SNMP agent shared by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use check_netbotz::agent::oids::{
    ThresholdColumns, HUMIDITY_COLUMNS, PROBE_COMM_STATUS, PROBE_INDEX, PROBE_NAME,
    TEMPERATURE_COLUMNS,
};
use check_netbotz::agent::{Oid, SnmpClient};
use check_netbotz::error::ProbeError;

/// Agent backed by a sorted OID -> value table, counting requests.
#[derive(Debug, Default)]
pub struct FakeAgent {
    values: BTreeMap<Oid, String>,
    pub gets: usize,
    pub walks: usize,
}

/// Thresholds and value for one probe row.
pub struct Probe<'a> {
    pub index: u32,
    pub name: &'a str,
    pub comm_status: &'a str,
    pub value: &'a str,
    pub low: &'a str,
    pub high: &'a str,
    pub min: &'a str,
    pub max: &'a str,
}

impl FakeAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, oid: Oid, value: &str) -> &mut Self {
        self.values.insert(oid, value.to_string());
        self
    }

    pub fn remove(&mut self, oid: &Oid) {
        self.values.remove(oid);
    }

    /// Populate one row for both temperature and humidity columns.
    pub fn with_probe(mut self, probe: Probe<'_>) -> Self {
        let i = probe.index;
        self.set(PROBE_INDEX.oid().instance(i), &i.to_string());
        self.set(PROBE_NAME.oid().instance(i), probe.name);
        self.set(PROBE_COMM_STATUS.oid().instance(i), probe.comm_status);
        for columns in [&TEMPERATURE_COLUMNS, &HUMIDITY_COLUMNS] {
            self.set_thresholds(columns, &probe);
        }
        self
    }

    fn set_thresholds(&mut self, columns: &ThresholdColumns, probe: &Probe<'_>) {
        let i = probe.index;
        self.set(columns.value.oid().instance(i), probe.value);
        self.set(columns.low.oid().instance(i), probe.low);
        self.set(columns.high.oid().instance(i), probe.high);
        self.set(columns.min.oid().instance(i), probe.min);
        self.set(columns.max.oid().instance(i), probe.max);
    }
}

impl SnmpClient for FakeAgent {
    fn get(&mut self, oid: &Oid) -> Result<String, ProbeError> {
        self.gets += 1;
        self.values
            .get(oid)
            .cloned()
            .ok_or_else(|| ProbeError::EmptyResponse {
                oid: oid.to_string(),
            })
    }

    fn walk(&mut self, column: &Oid) -> Result<Vec<String>, ProbeError> {
        self.walks += 1;
        Ok(self
            .values
            .iter()
            .filter(|(oid, _)| column.contains(oid.as_slice()))
            .map(|(_, value)| value.clone())
            .collect())
    }
}

/// The usual healthy probe: 25 within 10..30, hard limits 0..40.
pub fn probe<'a>(index: u32, name: &'a str, value: &'a str) -> Probe<'a> {
    Probe {
        index,
        name,
        comm_status: "2",
        value,
        low: "10",
        high: "30",
        min: "0",
        max: "40",
    }
}

/// Agent that never answers, like a host with nothing listening on 161.
pub struct SilentAgent;

impl SnmpClient for SilentAgent {
    fn get(&mut self, oid: &Oid) -> Result<String, ProbeError> {
        Err(ProbeError::Request {
            oid: oid.to_string(),
            reason: "ReceiveError".to_string(),
        })
    }

    fn walk(&mut self, column: &Oid) -> Result<Vec<String>, ProbeError> {
        Err(ProbeError::Request {
            oid: column.to_string(),
            reason: "ReceiveError".to_string(),
        })
    }
}
