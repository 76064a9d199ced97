pub mod client;
pub mod oids;

pub use client::{next_step, SnmpClient, UdpSnmpClient, WalkEnd};
pub use oids::{Oid, ThresholdColumns};
