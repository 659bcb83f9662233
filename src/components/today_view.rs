use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::Dashboard;
use crate::lifecycle::{self, LoadState};
use crate::shared::types::{HouseholdId, TodaySummary};
use crate::source::EnergySource;
use crate::utils::format::figure;
use crate::utils::timer::current_hour;

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// What the ready screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayDisplay {
    pub headline: String,
    pub savings: String,
    pub solar_kwh: String,
    pub wind_kwh: String,
}

impl TodayDisplay {
    pub fn derive(summary: &TodaySummary, hour: u32) -> Self {
        Self {
            headline: format!("{}, {}", greeting(hour), summary.owner_name),
            savings: figure(summary.savings_amount),
            solar_kwh: figure(summary.solar_generation),
            wind_kwh: figure(summary.wind_generation),
        }
    }
}

/// The one load for a mount of the Today screen. The request to `source`
/// starts when the returned future is first polled; `use_resource` does that
/// while mounting the view, before it can receive any event.
pub fn begin(
    source: Rc<dyn EnergySource>,
    household: HouseholdId,
) -> impl Future<Output = TodaySummary> {
    lifecycle::load("today", async move { source.today_summary(&household).await })
}

#[allow(non_snake_case)]
#[component]
pub fn TodayView(on_request_weekly: EventHandler<()>) -> Element {
    let dashboard = use_context::<Dashboard>();
    // No dependencies are read, so this runs once per mount.
    let summary = use_resource(move || begin(dashboard.source.clone(), dashboard.household.clone()));
    let summary_v = summary.read_unchecked();
    let state = LoadState::from(Option::as_ref(&*summary_v));

    match state {
        LoadState::Pending => rsx! {
            div { class: "min-h-screen bg-slate-950 flex items-center justify-center",
                div { class: "text-xl font-medium text-slate-400", "Loading..." }
            }
        },
        LoadState::Ready(summary) => {
            let display = TodayDisplay::derive(summary, current_hour());
            rsx! {
                div { class: "min-h-screen bg-slate-950",
                    div { class: "bg-emerald-700 text-slate-50 px-6 py-8",
                        h1 { class: "text-2xl font-semibold mb-2", "{display.headline}" }
                        p { class: "text-lg text-slate-50/80", "Here's your energy summary for today" }
                    }
                    div { class: "px-6 py-8 space-y-8 max-w-xl mx-auto",
                        // Savings
                        div { class: "rounded-2xl bg-emerald-500 text-slate-950 shadow-xl p-8 text-center space-y-2",
                            p { class: "text-lg font-medium opacity-90", "Money Saved Today" }
                            div { class: "text-5xl font-bold tabular-nums", "₹{display.savings}" }
                        }
                        div { class: "space-y-4",
                            h2 { class: "text-xl font-semibold text-slate-200 mb-4", "Power Generated Today" }
                            GenerationCard { title: "Power from Sun", kwh: display.solar_kwh.clone(), tone: "bg-amber-500 text-slate-950" }
                            GenerationCard { title: "Power from Wind", kwh: display.wind_kwh.clone(), tone: "bg-sky-600 text-slate-50" }
                        }
                        div { class: "pt-8",
                            button {
                                class: "w-full h-14 rounded-xl bg-emerald-600 text-lg font-semibold text-slate-50",
                                onclick: move |_| on_request_weekly.call(()),
                                "View Weekly Report"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn GenerationCard(title: &'static str, kwh: String, tone: &'static str) -> Element {
    rsx! {
        div { class: "rounded-2xl p-6 {tone}",
            p { class: "text-lg font-medium", "{title}" }
            p { class: "text-2xl font-bold tabular-nums", "{kwh} kWh" }
        }
    }
}
