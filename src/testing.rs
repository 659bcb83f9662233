//! Helpers for tests that render views in a `VirtualDom` on paused tokio time.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use dioxus::prelude::*;

use crate::app::Dashboard;
use crate::shared::types::{HouseholdId, TodaySummary, WeeklyReport};
use crate::source::{EnergySource, MockEnergySource};

/// Sample data behind the default latency, counting every request.
#[derive(Default)]
pub struct CountingSource {
    pub inner: MockEnergySource,
    pub today_calls: Cell<u32>,
    pub weekly_calls: Cell<u32>,
}

#[async_trait(?Send)]
impl EnergySource for CountingSource {
    async fn today_summary(&self, household: &HouseholdId) -> Result<TodaySummary> {
        self.today_calls.set(self.today_calls.get() + 1);
        self.inner.today_summary(household).await
    }

    async fn weekly_report(&self, household: &HouseholdId) -> Result<WeeklyReport> {
        self.weekly_calls.set(self.weekly_calls.get() + 1);
        self.inner.weekly_report(household).await
    }
}

pub fn dashboard(source: Rc<CountingSource>) -> Dashboard {
    Dashboard {
        source,
        household: HouseholdId::from("home-1"),
    }
}

/// Runs queued tasks and re-renders until the dom is idle, then returns the
/// current markup. Each idle check costs 1 ms of paused time.
pub async fn settle(dom: &mut VirtualDom) -> String {
    while tokio::time::timeout(Duration::from_millis(1), dom.wait_for_work())
        .await
        .is_ok()
    {
        let _ = dom.render_immediate_to_vec();
    }
    dioxus_ssr::render(dom)
}

/// Lets `by` of paused time pass, then settles.
pub async fn advance(dom: &mut VirtualDom, by: Duration) -> String {
    settle(dom).await;
    tokio::time::sleep(by).await;
    settle(dom).await
}
