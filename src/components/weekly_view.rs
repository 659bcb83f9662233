use std::future::Future;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::Dashboard;
use crate::components::UsageBarChart;
use crate::lifecycle::{self, LoadState};
use crate::shared::types::{HouseholdId, UsageDay, UsageKind, WeeklyReport};
use crate::source::EnergySource;

/// Visual treatment of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Muted,
}

impl Emphasis {
    pub fn for_kind(kind: UsageKind) -> Self {
        match kind {
            UsageKind::Actual => Emphasis::Primary,
            UsageKind::Predicted => Emphasis::Muted,
        }
    }

    pub fn fill_class(self) -> &'static str {
        match self {
            Emphasis::Primary => "text-emerald-400",
            Emphasis::Muted => "text-slate-600",
        }
    }

    pub fn swatch_class(self) -> &'static str {
        match self {
            Emphasis::Primary => "bg-emerald-400",
            Emphasis::Muted => "bg-slate-600",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub amount: f64,
    pub emphasis: Emphasis,
}

/// One bar per day, in series order.
pub fn chart_bars(series: &[UsageDay]) -> Vec<ChartBar> {
    series
        .iter()
        .map(|day| ChartBar {
            label: day.label.clone(),
            amount: day.amount,
            emphasis: Emphasis::for_kind(day.kind),
        })
        .collect()
}

/// The one load for a mount of the Weekly screen; the request starts on the
/// first poll of the returned future.
pub fn begin(
    source: Rc<dyn EnergySource>,
    household: HouseholdId,
) -> impl Future<Output = WeeklyReport> {
    lifecycle::load("weekly", async move { source.weekly_report(&household).await })
}

#[allow(non_snake_case)]
#[component]
pub fn WeeklyView(on_request_today: EventHandler<()>) -> Element {
    let dashboard = use_context::<Dashboard>();
    let report = use_resource(move || begin(dashboard.source.clone(), dashboard.household.clone()));
    let report_v = report.read_unchecked();
    let state = LoadState::from(Option::as_ref(&*report_v));

    match state {
        LoadState::Pending => rsx! {
            div { class: "min-h-screen bg-slate-950 flex items-center justify-center",
                div { class: "text-xl font-medium text-slate-400", "Loading weekly report..." }
            }
        },
        LoadState::Ready(report) => {
            let bars = chart_bars(&report.series);
            rsx! {
                div { class: "min-h-screen bg-slate-950",
                    div { class: "bg-emerald-700 text-slate-50 px-6 py-6",
                        div { class: "flex items-center space-x-4",
                            button {
                                class: "rounded-lg p-2 hover:bg-slate-50/20",
                                onclick: move |_| on_request_today.call(()),
                                "←"
                            }
                            h1 { class: "text-2xl font-semibold", "Your Weekly Power Usage" }
                        }
                    }
                    div { class: "px-6 py-8 space-y-8 max-w-3xl mx-auto",
                        div { class: "rounded-2xl border border-slate-800 bg-slate-900/60 shadow-xl p-6 space-y-4",
                            h2 { class: "text-lg font-semibold text-slate-200", "Units Used This Week (kWh)" }
                            UsageBarChart { bars: bars }
                        }
                        div { class: "rounded-2xl bg-slate-800 p-6",
                            h3 { class: "text-lg font-semibold text-slate-100 mb-3", "Weekly Summary" }
                            p { class: "text-slate-200 text-base leading-relaxed", "{report.summary_text}" }
                        }
                        div { class: "pt-4",
                            button {
                                class: "w-full h-14 rounded-xl border border-slate-600 text-lg font-semibold text-slate-100",
                                onclick: move |_| on_request_today.call(()),
                                "← Back to Today's View"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::{pin_mut, poll};

    use super::*;
    use crate::source::sample_weekly_report;
    use crate::testing::{advance, dashboard, settle, CountingSource};

    #[test]
    fn bars_keep_series_order_and_emphasis() {
        let bars = chart_bars(&sample_weekly_report().series);
        let labels: Vec<_> = bars.iter().map(|b| b.label.as_str()).collect();
        let emphasis: Vec<_> = bars.iter().map(|b| b.emphasis).collect();
        let amounts: Vec<_> = bars.iter().map(|b| b.amount).collect();

        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
        assert_eq!(
            emphasis,
            [
                Emphasis::Primary,
                Emphasis::Primary,
                Emphasis::Primary,
                Emphasis::Muted,
                Emphasis::Muted
            ]
        );
        assert_eq!(amounts, [4.2, 6.1, 5.3, 5.5, 5.8]);
    }

    #[test]
    fn bars_are_not_sorted() {
        let series = vec![
            UsageDay {
                label: "Fri".into(),
                amount: 1.0,
                kind: UsageKind::Predicted,
            },
            UsageDay {
                label: "Mon".into(),
                amount: 9.0,
                kind: UsageKind::Actual,
            },
        ];
        let bars = chart_bars(&series);
        assert_eq!(bars[0].label, "Fri");
        assert_eq!(bars[0].emphasis, Emphasis::Muted);
        assert_eq!(bars[1].label, "Mon");
        assert_eq!(bars[1].emphasis, Emphasis::Primary);
    }

    #[allow(non_snake_case)]
    #[component]
    fn LoneWeekly() -> Element {
        rsx! { WeeklyView { on_request_today: |_| {} } }
    }

    #[tokio::test(start_paused = true)]
    async fn begin_yields_the_exact_payload() {
        let source = Rc::new(CountingSource::default());
        let load = begin(source.clone(), HouseholdId::from("home-1"));
        pin_mut!(load);

        assert!(poll!(&mut load).is_pending());
        assert_eq!(load.await, sample_weekly_report());
        assert_eq!(source.weekly_calls.get(), 1);
        assert_eq!(source.today_calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn renders_loading_then_chart_and_summary() {
        let source = Rc::new(CountingSource::default());
        let mut dom = VirtualDom::new(LoneWeekly).with_root_context(dashboard(source.clone()));
        dom.rebuild_in_place();

        let html = settle(&mut dom).await;
        assert!(html.contains("Loading weekly report..."));
        assert_eq!(html.matches("<rect").count(), 0);

        let html = advance(&mut dom, Duration::from_millis(600)).await;
        assert!(!html.contains("Loading weekly report..."));
        assert!(html.contains(
            "You used the most power on Tuesday. We predict you will use about 5.5 units tomorrow."
        ));
        assert_eq!(html.matches("<rect").count(), 5);

        let positions: Vec<_> = ["Mon", "Tue", "Wed", "Thu", "Fri"]
            .iter()
            .map(|day| html.find(&format!(">{day}</text>")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(source.weekly_calls.get(), 1);
    }
}
