use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use dioxus::logger::tracing::{info, warn};

use crate::shared::types::HouseholdId;

pub const DEFAULT_HOUSEHOLD_ID: &str = "home-1";
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Where the views get their data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// In-process sample data behind a fixed delay.
    #[default]
    Mock,
    /// The `get_today_summary` / `get_weekly_report` server functions.
    Server,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "server" => Ok(Self::Server),
            other => bail!("unknown data source `{other}` (expected `mock` or `server`)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub household_id: HouseholdId,
    pub latency: Duration,
    pub source: SourceKind,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            household_id: HouseholdId::from(DEFAULT_HOUSEHOLD_ID),
            latency: DEFAULT_LATENCY,
            source: SourceKind::default(),
        }
    }
}

impl DashboardConfig {
    /// Builds the config from `DASHBOARD_*` variables; missing ones keep
    /// their defaults, malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(id) = lookup("DASHBOARD_HOUSEHOLD_ID") {
            let id = id.trim();
            if id.is_empty() {
                bail!("DASHBOARD_HOUSEHOLD_ID is empty");
            }
            config.household_id = HouseholdId::from(id);
        }
        if let Some(ms) = lookup("DASHBOARD_LATENCY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("DASHBOARD_LATENCY_MS is not a number: `{ms}`"))?;
            config.latency = Duration::from_millis(ms);
        }
        if let Some(source) = lookup("DASHBOARD_SOURCE") {
            config.source = source.parse()?;
        }
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// The browser has no process environment; values are baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| {
            match key {
                "DASHBOARD_HOUSEHOLD_ID" => option_env!("DASHBOARD_HOUSEHOLD_ID"),
                "DASHBOARD_LATENCY_MS" => option_env!("DASHBOARD_LATENCY_MS"),
                "DASHBOARD_SOURCE" => option_env!("DASHBOARD_SOURCE"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Like [`Self::from_env`], but falls back to defaults on bad input.
    pub fn load() -> Self {
        match Self::from_env() {
            Ok(config) => {
                info!(
                    household = %config.household_id,
                    latency_ms = config.latency.as_millis() as u64,
                    source = ?config.source,
                    "[config] loaded"
                );
                config
            }
            Err(e) => {
                warn!("[config] {e:#}; using defaults");
                Self::default()
            }
        }
    }
}
