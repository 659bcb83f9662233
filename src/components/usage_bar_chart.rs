use dioxus::prelude::*;

use crate::components::weekly_view::{ChartBar, Emphasis};
use crate::utils::format::format_kwh;

/// Height of each bar relative to the tallest one, in `0.0..=max_height`.
pub fn scaled_heights(bars: &[ChartBar], max_height: f32) -> Vec<f32> {
    let peak = bars.iter().map(|b| b.amount).fold(0.0f64, f64::max);
    bars.iter()
        .map(|b| {
            if peak <= 0.0 || b.amount <= 0.0 {
                0.0
            } else {
                (b.amount / peak) as f32 * max_height
            }
        })
        .collect()
}

/// Two-line hover label placed over a bar, kept inside `left..right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Tooltip {
    const CHAR_WIDTH: f32 = 7.0;
    const LINE_HEIGHT: f32 = 14.0;
    const INSET: f32 = 6.0;
    const GAP: f32 = 10.0;

    pub fn above(anchor_x: f32, anchor_y: f32, lines: &[&str], left: f32, right: f32) -> Self {
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let width = (longest as f32 * Self::CHAR_WIDTH + 2.0 * Self::INSET).min(right - left);
        let height = lines.len() as f32 * Self::LINE_HEIGHT + 8.0;
        let x = (anchor_x - width / 2.0).clamp(left, (right - width).max(left));
        let y = (anchor_y - Self::GAP - height).max(Self::INSET);
        Self { x, y, width, height }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn UsageBarChart(bars: Vec<ChartBar>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let height = 240.0f32;
    let padding = 24.0f32;
    let bar_width = 36.0f32;
    let bar_gap = 16.0f32;
    let n = bars.len().max(1) as f32;
    let width = (n * (bar_width + bar_gap) - bar_gap + padding * 2.0).ceil();
    let heights = scaled_heights(&bars, height);
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);
    let actual_swatch = Emphasis::Primary.swatch_class();
    let predicted_swatch = Emphasis::Muted.swatch_class();

    rsx! {
        div { class: "space-y-4",
            // Legend
            div { class: "flex items-center space-x-6 text-sm",
                div { class: "flex items-center space-x-2",
                    div { class: "w-4 h-4 rounded {actual_swatch}" }
                    span { class: "text-slate-400", "Actual" }
                }
                div { class: "flex items-center space-x-2",
                    div { class: "w-4 h-4 rounded border-2 border-slate-400 {predicted_swatch}" }
                    span { class: "text-slate-400", "Predicted" }
                }
            }
            svg { class: "block w-full", view_box: "{view_box}", width: "100%", height: "{(height + padding * 2.0).to_string()}",
                line { x1: "{padding}", y1: "{padding + height}", x2: "{width - padding}", y2: "{padding + height}", stroke: "#1f2937", stroke_width: "1" }
                {
                    bars.iter().zip(heights.iter().copied()).enumerate().map(|(i, (bar, h))| {
                        let x = padding + (i as f32) * (bar_width + bar_gap);
                        let y = padding + (height - h);
                        let cls = bar.emphasis.fill_class();
                        rsx!{
                            g { key: "{i}",
                                rect {
                                    class: "{cls}", x: "{x}", y: "{y}", width: "{bar_width}", height: "{h}", fill: "currentColor", rx: "4",
                                    onmouseenter: move |_| *hovered.write() = Some(i),
                                    onmouseleave: move |_| *hovered.write() = None,
                                    ontouchstart: move |_| *hovered.write() = Some(i),
                                    ontouchend: move |_| *hovered.write() = None,
                                }
                                text { x: "{x + bar_width / 2.0}", y: "{height + padding + 16.0}", text_anchor: "middle", class: "text-slate-400 fill-current text-[12px]", "{bar.label}" }
                            }
                        }
                    })
                }
                {
                    match *hovered.read() {
                        Some(i) if i < bars.len() => {
                            let bar = &bars[i];
                            let x = padding + (i as f32) * (bar_width + bar_gap) + bar_width / 2.0;
                            let y = padding + (height - heights[i]);
                            let value_label = format_kwh(bar.amount);
                            let tip = Tooltip::above(x, y, &[bar.label.as_str(), value_label.as_str()], padding, width - padding);
                            let (tip_x, tip_y, tip_w, tip_h) = (tip.x, tip.y, tip.width, tip.height);
                            rsx!{ g { key: "tooltip",
                                rect { x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 16.0}", class: "fill-current text-[11px] text-slate-300", "{bar.label}" }
                                text { x: "{tip_x + 8.0}", y: "{tip_y + 30.0}", class: "fill-current text-[11px] text-slate-200", "{value_label}" }
                            }}
                        }
                        _ => rsx!{ Fragment {} }
                    }
                }
            }
        }
    }
}
