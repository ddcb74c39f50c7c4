//! Incident domain model
//!
//! Canonical shapes the rest of the dashboard works with. Wire shapes coming
//! from the backend live in [`normalize`] (list records) and here
//! ([`IncidentDetail`]), department matching lives in [`departments`].

pub mod departments;
pub mod normalize;

pub use departments::{Department, DEPARTMENTS};
pub use normalize::{duplicate_ids, normalize, RawIncident};

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Incident
// ─────────────────────────────────────────────────────────────────────────────

/// An incident after normalization: always carries an id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub department_name: String,
    pub status: IncidentStatus,
    pub created_at: String,
}

impl Incident {
    /// Display-only severity derived from status
    pub fn severity(&self) -> Severity {
        Severity::from_status(&self.status)
    }

    /// Human readable creation time, or the raw text if it doesn't parse
    pub fn created_display(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// Parse a backend timestamp (RFC 3339 or naive ISO) into `YYYY-MM-DD HH:MM`
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────────────────────────

/// Incident lifecycle status. Unknown wire values pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncidentStatus {
    Open,
    InProgress,
    Resolved,
    Other(String),
}

impl IncidentStatus {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "OPEN" => Self::Open,
            "IN_PROGRESS" => Self::InProgress,
            "RESOLVED" => Self::Resolved,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Other(s) => s,
        }
    }
}

impl Default for IncidentStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IncidentStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IncidentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&s))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Severity
// ─────────────────────────────────────────────────────────────────────────────

/// Urgency tier shown on badges. Not server-authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    S1,
    S2,
    S3,
    S4,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::S1, Self::S2, Self::S3, Self::S4];

    pub fn from_status(status: &IncidentStatus) -> Self {
        match status {
            IncidentStatus::Open => Self::S1,
            IncidentStatus::InProgress => Self::S2,
            _ => Self::S3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
            Self::S4 => "S4",
        }
    }

    /// Tier name, listed in the settings severity legend
    pub fn description(&self) -> &'static str {
        match self {
            Self::S1 => "Critical",
            Self::S2 => "High",
            Self::S3 => "Medium",
            Self::S4 => "Low",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detail
// ─────────────────────────────────────────────────────────────────────────────

/// One AI-suggested root cause in the detail payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub title: String,
    pub description: String,
    pub actions: String,
}

/// Detail payload for a single incident
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetail {
    pub detail: String,
    /// Owning department (the backend calls it "departure")
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub reason_list: Vec<Reason>,
}

impl IncidentDetail {
    /// Canned payload shown whenever the detail request fails
    pub fn placeholder() -> Self {
        let reason = |title: &str, description: &str, actions: &str| Reason {
            title: title.to_string(),
            description: description.to_string(),
            actions: actions.to_string(),
        };

        Self {
            detail: "Ứng dụng HR nội bộ không truy cập được (DỮ LIỆU GIẢ)".to_string(),
            departure: "Phòng Ứng dụng nội bộ".to_string(),
            reason_list: vec![
                reason(
                    "Lỗi kết nối cơ sở dữ liệu",
                    "Ứng dụng không thể kết nối tới DB do cấu hình sai hoặc DB dừng.",
                    "Kiểm tra cấu hình và đảm bảo DB đang chạy.",
                ),
                reason(
                    "Thiếu dữ liệu đầu vào",
                    "Một số trường dữ liệu bắt buộc bị thiếu.",
                    "Đảm bảo các trường cần thiết có trong request.",
                ),
                reason(
                    "Lỗi logic trong mã nguồn",
                    "Có thể do nhầm điều kiện trong luồng xử lý.",
                    "Debug và viết test case để tái hiện.",
                ),
            ],
        }
    }

    /// Department label, falling back when the backend sent none
    pub fn department_display(&self) -> &str {
        if self.departure.is_empty() {
            "Chưa rõ"
        } else {
            &self.departure
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Creation
// ─────────────────────────────────────────────────────────────────────────────

/// Title sent when the form title is left empty
pub const UNTITLED_INCIDENT: &str = "Sự cố không có tiêu đề";

/// Description sent when the form description is left empty
pub const MISSING_DESCRIPTION: &str = "Chưa có mô tả";

/// Request body for creating an incident
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    pub name: String,
    pub description: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_room_id: Option<u32>,
}

impl NewIncident {
    /// Build a creation request from raw form input, filling empty fields
    pub fn from_form(title: &str, description: &str, department_id: Option<u32>) -> Self {
        let name = if title.is_empty() {
            UNTITLED_INCIDENT.to_string()
        } else {
            title.to_string()
        };
        let description = if description.is_empty() {
            MISSING_DESCRIPTION.to_string()
        } else {
            description.to_string()
        };

        Self {
            name,
            description,
            status: "OPEN",
            assigned_room_id: department_id,
        }
    }
}

/// Whatever the backend echoes back after a successful create
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedIncident {
    pub record: serde_json::Value,
}

impl CreatedIncident {
    /// Server-assigned id, same preference as list records
    pub fn id(&self) -> Option<i64> {
        normalize::numeric_id(self.record.get("incidentId"))
            .or_else(|| normalize::numeric_id(self.record.get("id")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn severity_tiers_in_order() {
        let labels: Vec<&str> = Severity::ALL.iter().map(Severity::label).collect();
        assert_eq!(labels, vec!["S1", "S2", "S3", "S4"]);
        assert_eq!(Severity::S4.description(), "Low");
    }

    #[test]
    fn severity_follows_status() {
        assert_eq!(Severity::from_status(&IncidentStatus::Open), Severity::S1);
        assert_eq!(
            Severity::from_status(&IncidentStatus::InProgress),
            Severity::S2
        );
        assert_eq!(Severity::from_status(&IncidentStatus::Resolved), Severity::S3);
        assert_eq!(
            Severity::from_status(&IncidentStatus::Other("ON_HOLD".into())),
            Severity::S3
        );
    }

    #[test]
    fn unknown_status_passes_through() {
        let status: IncidentStatus = serde_json::from_value(json!("ESCALATED")).unwrap();
        assert_eq!(status, IncidentStatus::Other("ESCALATED".into()));
        assert_eq!(status.as_str(), "ESCALATED");
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("ESCALATED"));
    }

    #[test]
    fn timestamps_render_or_pass_through() {
        assert_eq!(format_timestamp("2024-01-15T16:30:00Z"), "2024-01-15 16:30");
        assert_eq!(
            format_timestamp("2024-01-15T16:30:12.345678"),
            "2024-01-15 16:30"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn new_incident_fills_empty_fields() {
        let body = serde_json::to_value(NewIncident::from_form("", "", None)).unwrap();
        assert_eq!(
            body,
            json!({
                "name": UNTITLED_INCIDENT,
                "description": MISSING_DESCRIPTION,
                "status": "OPEN",
            })
        );

        let body = serde_json::to_value(NewIncident::from_form("DB down", "pool", Some(2))).unwrap();
        assert_eq!(body["assignedRoomId"], json!(2));
        assert_eq!(body["name"], json!("DB down"));
    }

    #[test]
    fn detail_decodes_camel_case() {
        let detail: IncidentDetail = serde_json::from_value(json!({
            "detail": "Gateway 502",
            "departure": "Phòng Tích hợp",
            "reasonList": [{"title": "t", "description": "d", "actions": "a"}],
        }))
        .unwrap();
        assert_eq!(detail.reason_list.len(), 1);
        assert_eq!(detail.department_display(), "Phòng Tích hợp");
    }

    #[test]
    fn created_incident_id_prefers_incident_id() {
        let created = CreatedIncident {
            record: json!({"incidentId": 12, "id": 3}),
        };
        assert_eq!(created.id(), Some(12));
        let created = CreatedIncident {
            record: json!({"name": "x"}),
        };
        assert_eq!(created.id(), None);
        let created = CreatedIncident {
            record: json!({"incidentId": null, "id": 12}),
        };
        assert_eq!(created.id(), Some(12));
        let created = CreatedIncident {
            record: json!({"incidentId": "abc", "id": 12.0}),
        };
        assert_eq!(created.id(), Some(12));
        let created = CreatedIncident {
            record: serde_json::Value::Null,
        };
        assert_eq!(created.id(), None);
    }
}
