use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{TodayView, WeeklyView};
use crate::config::{DashboardConfig, SourceKind};
use crate::navigation::{ViewController, ViewName};
use crate::shared::types::HouseholdId;
use crate::source::{EnergySource, MockEnergySource, ServerEnergySource};
use crate::TAILWIND_CSS;

/// Shared with both views through context.
#[derive(Clone)]
pub struct Dashboard {
    pub source: Rc<dyn EnergySource>,
    pub household: HouseholdId,
}

impl Dashboard {
    pub fn from_config(config: DashboardConfig) -> Self {
        let source: Rc<dyn EnergySource> = match config.source {
            SourceKind::Mock => Rc::new(MockEnergySource {
                latency: config.latency,
            }),
            SourceKind::Server => Rc::new(ServerEnergySource),
        };
        Self {
            source,
            household: config.household_id,
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_context_provider(|| Dashboard::from_config(DashboardConfig::load()));
    let controller = use_signal(ViewController::default);

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "theme-color", content: "#020618" } // slate-950
        document::Meta { name: "color-scheme", content: "dark" }
        div { class: "min-h-screen bg-slate-950 text-slate-100",
            Screens { controller: controller }
        }
    }
}

/// Mounts the current view only; switching unmounts the other one, so each
/// visit starts a fresh load.
#[allow(non_snake_case)]
#[component]
pub fn Screens(controller: Signal<ViewController>) -> Element {
    let mut controller = controller;
    let current = controller.read().current();
    match current {
        ViewName::Today => rsx! {
            TodayView { on_request_weekly: move |_| controller.write().go_to_weekly() }
        },
        ViewName::Weekly => rsx! {
            WeeklyView { on_request_today: move |_| controller.write().go_to_today() }
        },
    }
}
