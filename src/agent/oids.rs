/// PowerNet-MIB probe status table identifiers
use std::fmt;

use crate::models::MeasurementKind;

/// emsProbeStatusEntry: 1.3.6.1.4.1.318.1.1.10.3.13.1.1
const PROBE_STATUS_ENTRY: [u32; 14] = [1, 3, 6, 1, 4, 1, 318, 1, 1, 10, 3, 13, 1, 1];

// Column numbers inside emsProbeStatusEntry
const COL_INDEX: u32 = 1;
const COL_NAME: u32 = 2;
const COL_TEMPERATURE: u32 = 3;
const COL_HIGH_TEMP: u32 = 4;
const COL_LOW_TEMP: u32 = 5;
const COL_HUMIDITY: u32 = 6;
const COL_HIGH_HUMIDITY: u32 = 7;
const COL_LOW_HUMIDITY: u32 = 8;
const COL_COMM_STATUS: u32 = 10;
const COL_MAX_TEMP: u32 = 12;
const COL_MIN_TEMP: u32 = 13;
const COL_MAX_HUMIDITY: u32 = 14;
const COL_MIN_HUMIDITY: u32 = 15;

/// emsProbeStatusProbeCommStatus value for commsEstablished
pub const COMMS_ESTABLISHED: &str = "2";

/// Numeric object identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Oid(Vec<u32>);

impl Oid {
    pub fn new(arcs: Vec<u32>) -> Self {
        Oid(arcs)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Instance identifier of this column for one table row
    pub fn instance(&self, index: u32) -> Oid {
        let mut arcs = self.0.clone();
        arcs.push(index);
        Oid(arcs)
    }

    pub fn contains(&self, other: &[u32]) -> bool {
        other.len() > self.0.len() && other.starts_with(&self.0)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted: Vec<String> = self.0.iter().map(|arc| arc.to_string()).collect();
        f.write_str(&dotted.join("."))
    }
}

/// A MIB column with its symbolic name for logs and errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    number: u32,
}

impl Column {
    const fn new(name: &'static str, number: u32) -> Self {
        Column { name, number }
    }

    pub fn oid(&self) -> Oid {
        let mut arcs = PROBE_STATUS_ENTRY.to_vec();
        arcs.push(self.number);
        Oid(arcs)
    }
}

pub const PROBE_INDEX: Column = Column::new("emsProbeStatusProbeIndex", COL_INDEX);
pub const PROBE_NAME: Column = Column::new("emsProbeStatusProbeName", COL_NAME);
pub const PROBE_COMM_STATUS: Column =
    Column::new("emsProbeStatusProbeCommStatus", COL_COMM_STATUS);

/// Columns holding the reading and its thresholds for one measurement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdColumns {
    pub value: Column,
    pub high: Column,
    pub low: Column,
    pub max: Column,
    pub min: Column,
}

pub const TEMPERATURE_COLUMNS: ThresholdColumns = ThresholdColumns {
    value: Column::new("emsProbeStatusProbeTemperature", COL_TEMPERATURE),
    high: Column::new("emsProbeStatusProbeHighTempThresh", COL_HIGH_TEMP),
    low: Column::new("emsProbeStatusProbeLowTempThresh", COL_LOW_TEMP),
    max: Column::new("emsProbeStatusProbeMaxTempThresh", COL_MAX_TEMP),
    min: Column::new("emsProbeStatusProbeMinTempThresh", COL_MIN_TEMP),
};

pub const HUMIDITY_COLUMNS: ThresholdColumns = ThresholdColumns {
    value: Column::new("emsProbeStatusProbeHumidity", COL_HUMIDITY),
    high: Column::new("emsProbeStatusProbeHighHumidityThresh", COL_HIGH_HUMIDITY),
    low: Column::new("emsProbeStatusProbeLowHumidityThresh", COL_LOW_HUMIDITY),
    max: Column::new("emsProbeStatusProbeMaxHumidityThresh", COL_MAX_HUMIDITY),
    min: Column::new("emsProbeStatusProbeMinHumidityThresh", COL_MIN_HUMIDITY),
};

impl ThresholdColumns {
    pub fn for_kind(kind: MeasurementKind) -> &'static ThresholdColumns {
        match kind {
            MeasurementKind::Temperature => &TEMPERATURE_COLUMNS,
            MeasurementKind::Humidity => &HUMIDITY_COLUMNS,
        }
    }
}
