/// SNMP access to the NetBotz agent
use log::{debug, trace};
use snmp::{ObjIdBuf, SyncSession, Value};

use crate::agent::oids::Oid;
use crate::config::ProbeConfig;
use crate::error::ProbeError;

/// The two reads the probe needs from an agent.
///
/// Implementations are bound to one host and community for their lifetime.
pub trait SnmpClient {
    /// Read a single variable instance
    fn get(&mut self, oid: &Oid) -> Result<String, ProbeError>;

    /// Read every instance below a column, in agent order
    fn walk(&mut self, column: &Oid) -> Result<Vec<String>, ProbeError> {
        let mut values = Vec::new();
        let mut cursor = column.clone();

        loop {
            let response = self
                .session
                .getnext(cursor.as_slice())
                .map_err(|e| request_error(&cursor, format!("{:?}", e)))?;

            let error_status = response.error_status;
            let mut varbinds = response.varbinds;

            // Exception varbinds (endOfMibView and friends) fail to decode
            // and end the iterator, so they arrive here as `None`
            let mut buf: ObjIdBuf = [0; 128];
            let (returned, text) = match varbinds.next() {
                Some((name, value)) => (
                    name.read_name(&mut buf).ok().map(|arcs| arcs.to_vec()),
                    value_text(&value),
                ),
                None => (None, None),
            };

            match next_step(column, &cursor, error_status, returned.as_deref()) {
                Ok(next) => {
                    if let Some(text) = text {
                        trace!("WALK {} -> {}", next, text);
                        values.push(text);
                    }
                    cursor = next;
                }
                Err(end) => {
                    debug!("Walk of {} ended after {}: {:?}", column, cursor, end);
                    break;
                }
            }
        }

        debug!("Walk of {} returned {} values", column, values.len());
        Ok(values)
    }
}

/// Why a GETNEXT walk stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkEnd {
    /// Non-zero error status, e.g. noSuchName from v1-style agents
    AgentError(u32),
    /// No decodable varbind in the response
    NoVarbind,
    /// The returned OID belongs to another column
    LeftSubtree,
    /// The agent did not move forward
    NotIncreasing,
}

/// Decide whether a GETNEXT response continues the walk of `column`
///
/// # Arguments
/// * `column` - Root of the walk
/// * `cursor` - OID the request was issued for
/// * `error_status` - Error status of the response PDU
/// * `returned` - Name of the first varbind, if one decoded
///
/// # Returns
/// The next cursor, or why the walk is over
pub fn next_step(
    column: &Oid,
    cursor: &Oid,
    error_status: u32,
    returned: Option<&[u32]>,
) -> Result<Oid, WalkEnd> {
    if error_status != 0 {
        return Err(WalkEnd::AgentError(error_status));
    }

    let arcs = returned.ok_or(WalkEnd::NoVarbind)?;
    if !column.contains(arcs) {
        return Err(WalkEnd::LeftSubtree);
    }

    let next = Oid::new(arcs.to_vec());
    if next <= *cursor {
        return Err(WalkEnd::NotIncreasing);
    }

    Ok(next)
}

fn request_error(oid: &Oid, reason: String) -> ProbeError {
    ProbeError::Request {
        oid: oid.to_string(),
        reason,
    }
}

/// Render a scalar varbind the way the agent's textual tools would
fn value_text(value: &Value) -> Option<String> {
    match *value {
        Value::Integer(n) => Some(n.to_string()),
        Value::OctetString(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => Some(n.to_string()),
        Value::Counter64(n) => Some(n.to_string()),
        _ => None,
    }
}
