pub mod today_view;
pub mod usage_bar_chart;
pub mod weekly_view;

pub use today_view::TodayView;
pub use usage_bar_chart::UsageBarChart;
pub use weekly_view::WeeklyView;
