//! Incident normalization
//!
//! The listing endpoint is loose about identifiers: some deployments send
//! `incidentId`, some send `id`, some send neither. Normalization picks the
//! first numeric one and otherwise falls back to the record's position in the
//! response, so every row can be rendered and opened by id.
//!
//! Position-derived ids are only unique within one response. A later fetch
//! that reorders records hands different synthetic ids to the same incident.

use super::{Incident, IncidentStatus};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Department label used when a record carries none
pub const UNKNOWN_DEPARTMENT: &str = "unknown";

/// One listing record as decoded from the wire
///
/// Identifier fields are kept as raw JSON so a string or float id can be told
/// apart from a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIncident {
    #[serde(default)]
    pub incident_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub incident_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub status: Option<IncidentStatus>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl RawIncident {
    /// Resolve the canonical id for a record at position `idx`
    pub fn resolve_id(&self, idx: usize) -> i64 {
        numeric_id(self.incident_id.as_ref())
            .or_else(|| numeric_id(self.id.as_ref()))
            .unwrap_or(idx as i64)
    }
}

/// A JSON number with no fractional part that fits in i64
///
/// Integral floats (`5.0`) count, since some backends send every number as a
/// double. Fractional values, strings and null count as absent.
pub(crate) fn numeric_id(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Normalize one listing response into canonical incidents
pub fn normalize(raw: Vec<RawIncident>) -> Vec<Incident> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, record)| Incident {
            id: record.resolve_id(idx),
            name: record.incident_name.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            department_name: record
                .department_name
                .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string()),
            status: record.status.unwrap_or_default(),
            created_at: record.created_at.unwrap_or_default(),
        })
        .collect()
}

/// Ids that occur more than once in a normalized list, with their counts
///
/// Happens when the backend repeats an id, or when a synthetic position id
/// lands on a real id sent for another record.
pub fn duplicate_ids(incidents: &[Incident]) -> BTreeMap<i64, usize> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for incident in incidents {
        *counts.entry(incident.id).or_insert(0) += 1;
    }
    counts.into_iter().filter(|(_, n)| *n > 1).collect()
}
