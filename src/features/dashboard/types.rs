use serde::{Deserialize, Serialize};

/// Counters returned by `GET /dashboard/stats`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_reports: u64,
    pub pending_reports: u64,
    pub resolved_reports: u64,
    pub upcoming_hearings: u64,
}

#[cfg(test)]
mod tests {
    use super::DashboardStats;

    #[test]
    fn stats_parse_from_camel_case() {
        let body = r#"{"totalReports":12,"pendingReports":4,"resolvedReports":7,"upcomingHearings":2}"#;
        let stats: DashboardStats = serde_json::from_str(body).expect("Failed to parse");
        assert_eq!(stats.total_reports, 12);
        assert_eq!(stats.upcoming_hearings, 2);
    }
}
