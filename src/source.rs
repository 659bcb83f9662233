//! Data sources the views load from.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use dioxus::logger::tracing::debug;

use crate::api::{get_today_summary, get_weekly_report};
use crate::config::DEFAULT_LATENCY;
use crate::shared::types::{HouseholdId, TodaySummary, UsageDay, UsageKind, WeeklyReport};
use crate::utils::timer::sleep;

/// Read-only, idempotent queries for one household.
///
/// Futures are not `Send`: the UI executor is single-threaded.
#[async_trait(?Send)]
pub trait EnergySource {
    async fn today_summary(&self, household: &HouseholdId) -> Result<TodaySummary>;

    async fn weekly_report(&self, household: &HouseholdId) -> Result<WeeklyReport>;
}

pub fn sample_today_summary() -> TodaySummary {
    TodaySummary {
        owner_name: "Sunil".into(),
        savings_amount: 52.0,
        solar_generation: 4.5,
        wind_generation: 2.1,
    }
}

pub fn sample_weekly_report() -> WeeklyReport {
    let day = |label: &str, amount, kind| UsageDay {
        label: label.into(),
        amount,
        kind,
    };
    WeeklyReport {
        series: vec![
            day("Mon", 4.2, UsageKind::Actual),
            day("Tue", 6.1, UsageKind::Actual),
            day("Wed", 5.3, UsageKind::Actual),
            day("Thu", 5.5, UsageKind::Predicted),
            day("Fri", 5.8, UsageKind::Predicted),
        ],
        summary_text: "You used the most power on Tuesday. We predict you will use about 5.5 units tomorrow."
            .into(),
    }
}

/// Serves the sample payloads after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockEnergySource {
    pub latency: Duration,
}

impl Default for MockEnergySource {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}

#[async_trait(?Send)]
impl EnergySource for MockEnergySource {
    async fn today_summary(&self, household: &HouseholdId) -> Result<TodaySummary> {
        debug!(%household, "[mock] today summary in {:?}", self.latency);
        sleep(self.latency).await;
        Ok(sample_today_summary())
    }

    async fn weekly_report(&self, household: &HouseholdId) -> Result<WeeklyReport> {
        debug!(%household, "[mock] weekly report in {:?}", self.latency);
        sleep(self.latency).await;
        Ok(sample_weekly_report())
    }
}

/// Goes through the server functions in [`crate::api`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerEnergySource;

#[async_trait(?Send)]
impl EnergySource for ServerEnergySource {
    async fn today_summary(&self, household: &HouseholdId) -> Result<TodaySummary> {
        get_today_summary(household.clone())
            .await
            .map_err(|e| anyhow::anyhow!("get_today_summary failed: {e}"))
    }

    async fn weekly_report(&self, household: &HouseholdId) -> Result<WeeklyReport> {
        get_weekly_report(household.clone())
            .await
            .map_err(|e| anyhow::anyhow!("get_weekly_report failed: {e}"))
    }
}
