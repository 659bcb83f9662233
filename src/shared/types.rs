use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the home a dashboard is reporting on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseholdId(pub String);

impl fmt::Display for HouseholdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HouseholdId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySummary {
    #[serde(rename = "user_name")]
    pub owner_name: String,
    #[serde(rename = "today_savings_rupees")]
    pub savings_amount: f64,
    #[serde(rename = "solar_today_kwh")]
    pub solar_generation: f64, // kWh
    #[serde(rename = "wind_today_kwh")]
    pub wind_generation: f64, // kWh
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageKind {
    Actual,
    Predicted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDay {
    #[serde(rename = "day")]
    pub label: String,
    #[serde(rename = "kwh")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: UsageKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Calendar order, oldest first.
    #[serde(rename = "weekly_data")]
    pub series: Vec<UsageDay>,
    #[serde(rename = "summary_message")]
    pub summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_summary_uses_wire_names() {
        let summary: TodaySummary = serde_json::from_str(
            r#"{"user_name":"Sunil","today_savings_rupees":52,"solar_today_kwh":4.5,"wind_today_kwh":2.1}"#,
        )
        .unwrap();
        assert_eq!(summary.owner_name, "Sunil");
        assert_eq!(summary.savings_amount, 52.0);
        assert_eq!(summary.solar_generation, 4.5);
        assert_eq!(summary.wind_generation, 2.1);
    }

    #[test]
    fn weekly_report_keeps_series_order() {
        let report: WeeklyReport = serde_json::from_str(
            r#"{
                "weekly_data": [
                    {"day": "Wed", "kwh": 5.3, "type": "actual"},
                    {"day": "Mon", "kwh": 4.2, "type": "predicted"}
                ],
                "summary_message": "ok"
            }"#,
        )
        .unwrap();
        let labels: Vec<_> = report.series.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Wed", "Mon"]);
        assert_eq!(report.series[1].kind, UsageKind::Predicted);
    }

    #[test]
    fn usage_kind_is_lowercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&UsageKind::Actual).unwrap(), r#""actual""#);
        assert!(serde_json::from_str::<UsageKind>(r#""Actual""#).is_err());
    }

    #[test]
    fn household_id_is_a_bare_string() {
        assert_eq!(serde_json::to_string(&HouseholdId::from("home-1")).unwrap(), r#""home-1""#);
    }
}
