use dioxus::prelude::*;

use crate::shared::types::{HouseholdId, TodaySummary, WeeklyReport};

#[cfg(feature = "server")]
static SERVER_CONFIG: once_cell::sync::OnceCell<crate::config::DashboardConfig> =
    once_cell::sync::OnceCell::new();

#[cfg(feature = "server")]
fn server_latency() -> std::time::Duration {
    SERVER_CONFIG
        .get_or_init(crate::config::DashboardConfig::load)
        .latency
}

#[server(GetTodaySummary)]
pub async fn get_today_summary(household_id: HouseholdId) -> Result<TodaySummary, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::info;

        info!(household = %household_id, "[api] today summary");
        crate::utils::timer::sleep(server_latency()).await;
        Ok(crate::source::sample_today_summary())
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = household_id;
        Err(ServerFnError::ServerError("server feature disabled".into()))
    }
}

#[server(GetWeeklyReport)]
pub async fn get_weekly_report(household_id: HouseholdId) -> Result<WeeklyReport, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::info;

        info!(household = %household_id, "[api] weekly report");
        crate::utils::timer::sleep(server_latency()).await;
        Ok(crate::source::sample_weekly_report())
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = household_id;
        Err(ServerFnError::ServerError("server feature disabled".into()))
    }
}
