//! Types for blotter report records and their lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a blotter report, as the backend names it on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
    Rejected,
}

impl ReportStatus {
    /// Wire spelling used by the backend and in form values.
    pub fn wire_name(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in_progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Closed => "closed",
            ReportStatus::Rejected => "rejected",
        }
    }

    /// Parses the wire spelling back into a status.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ReportStatus::Pending),
            "in_progress" => Some(ReportStatus::InProgress),
            "resolved" => Some(ReportStatus::Resolved),
            "closed" => Some(ReportStatus::Closed),
            "rejected" => Some(ReportStatus::Rejected),
            _ => None,
        }
    }

    /// Badge color classes per status, shared by list and detail views.
    pub fn badge_class(self) -> &'static str {
        match self {
            ReportStatus::Pending => "bg-amber-100 text-amber-800",
            ReportStatus::InProgress => "bg-blue-100 text-blue-800",
            ReportStatus::Resolved => "bg-emerald-100 text-emerald-800",
            ReportStatus::Closed => "bg-gray-100 text-gray-800",
            ReportStatus::Rejected => "bg-red-100 text-red-800",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportStatus::Pending => "pending",
            ReportStatus::InProgress => "in progress",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Closed => "closed",
            ReportStatus::Rejected => "rejected",
        };
        write!(formatter, "{label}")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub complainant: String,
    pub respondent: String,
    pub incident_type: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    pub status: ReportStatus,
    #[serde(default)]
    pub evidence_uri: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload for creating or replacing a report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub complainant: String,
    pub respondent: String,
    pub incident_type: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    #[serde(default)]
    pub evidence_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&ReportStatus::InProgress).expect("Failed to serialize");
        assert_eq!(json, r#""in_progress""#);

        let status: ReportStatus =
            serde_json::from_str(r#""resolved""#).expect("Failed to parse");
        assert_eq!(status, ReportStatus::Resolved);
    }

    #[test]
    fn wire_name_round_trips_and_matches_serde() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::InProgress,
            ReportStatus::Resolved,
            ReportStatus::Closed,
            ReportStatus::Rejected,
        ] {
            assert_eq!(ReportStatus::from_wire(status.wire_name()), Some(status));
            let json = serde_json::to_string(&status).expect("Failed to serialize");
            assert_eq!(json, format!("\"{}\"", status.wire_name()));
        }
        assert_eq!(ReportStatus::from_wire("archived"), None);
    }

    #[test]
    fn report_parses_with_optional_fields_absent() {
        let body = r#"{
            "id": "r-9",
            "complainant": "A. Reyes",
            "respondent": "Unknown",
            "incidentType": "theft",
            "description": "Bicycle taken from the rack.",
            "status": "pending",
            "createdAt": "2026-08-01T09:30:00Z"
        }"#;
        let report: Report = serde_json::from_str(body).expect("Failed to parse");

        assert_eq!(report.incident_type, "theft");
        assert_eq!(report.status, ReportStatus::Pending);
        assert!(report.location.is_none());
        assert!(report.evidence_uri.is_none());
    }
}
