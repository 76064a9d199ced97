//! Discovery and fetching against an in-memory agent.

mod common;

use check_netbotz::agent::oids::{HUMIDITY_COLUMNS, PROBE_COMM_STATUS, TEMPERATURE_COLUMNS};
use check_netbotz::error::ProbeError;
use check_netbotz::models::MeasurementKind;
use check_netbotz::probe::{collect, discover_sensors, fetch_readings};

use common::{probe, FakeAgent, Probe, SilentAgent};

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

#[test]
fn discovery_keeps_only_communicating_sensors() {
    let mut agent = FakeAgent::new()
        .with_probe(probe(1, "Inlet", "22"))
        .with_probe(Probe {
            comm_status: "3",
            ..probe(2, "Unplugged", "0")
        })
        .with_probe(probe(3, "Outlet", "27"));

    let indices = discover_sensors(&mut agent).expect("discovery should succeed");
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(agent.walks, 1);
    assert_eq!(agent.gets, 3, "one status read per discovered index");
}

#[test]
fn empty_walk_is_a_discovery_failure() {
    let mut agent = FakeAgent::new();
    let err = discover_sensors(&mut agent).unwrap_err();
    assert!(matches!(err, ProbeError::NoSensors));
    assert_eq!(err.to_string(), "Cannot interact with NetBotz SNMP Agent");
}

#[test]
fn failed_walk_is_a_discovery_failure() {
    let err = discover_sensors(&mut SilentAgent).unwrap_err();
    assert!(matches!(err, ProbeError::NoSensors));
}

#[test]
fn all_sensors_disconnected_is_an_empty_set() {
    let mut agent = FakeAgent::new().with_probe(Probe {
        comm_status: "1",
        ..probe(4, "Never seen", "0")
    });
    let indices = discover_sensors(&mut agent).expect("discovery should succeed");
    assert!(indices.is_empty());
}

#[test]
fn missing_status_fails_discovery() {
    let mut agent = FakeAgent::new().with_probe(probe(1, "Inlet", "22"));
    agent.remove(&PROBE_COMM_STATUS.oid().instance(1));
    assert!(matches!(
        discover_sensors(&mut agent),
        Err(ProbeError::EmptyResponse { .. })
    ));
}

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

#[test]
fn fetch_reads_name_value_and_thresholds() {
    let mut agent = FakeAgent::new().with_probe(Probe {
        index: 7,
        name: "Cold aisle",
        comm_status: "2",
        value: "19",
        low: "15",
        high: "27",
        min: "10",
        max: "32",
    });

    let readings = fetch_readings(&mut agent, &[7], &TEMPERATURE_COLUMNS).unwrap();
    let reading = &readings[&7];
    assert_eq!(reading.name, "Cold aisle");
    assert_eq!(reading.value, 19.0);
    assert_eq!(reading.low, 15.0);
    assert_eq!(reading.high, 27.0);
    assert_eq!(reading.min, 10.0);
    assert_eq!(reading.max, 32.0);
    assert_eq!(agent.gets, 6, "name plus five numeric reads");
}

#[test]
fn one_missing_threshold_fails_the_whole_fetch() {
    let mut agent = FakeAgent::new()
        .with_probe(probe(1, "Inlet", "22"))
        .with_probe(probe(2, "Outlet", "24"));
    agent.remove(&HUMIDITY_COLUMNS.max.oid().instance(2));

    let err = fetch_readings(&mut agent, &[1, 2], &HUMIDITY_COLUMNS).unwrap_err();
    assert!(matches!(err, ProbeError::EmptyResponse { .. }));
}

#[test]
fn non_numeric_value_names_the_variable() {
    let mut agent = FakeAgent::new().with_probe(probe(5, "Door", "n/a"));
    let err = fetch_readings(&mut agent, &[5], &TEMPERATURE_COLUMNS).unwrap_err();
    assert_eq!(
        err.to_string(),
        "sensor 5: emsProbeStatusProbeTemperature has invalid value 'n/a'"
    );
}

#[test]
fn collect_selects_columns_by_kind() {
    let mut agent = FakeAgent::new().with_probe(probe(1, "Inlet", "22"));
    agent.set(HUMIDITY_COLUMNS.value.oid().instance(1), "45");

    let temperature = collect(&mut agent, MeasurementKind::Temperature).unwrap();
    let humidity = collect(&mut agent, MeasurementKind::Humidity).unwrap();
    assert_eq!(temperature[&1].value, 22.0);
    assert_eq!(humidity[&1].value, 45.0);
}
