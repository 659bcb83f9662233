use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Local wall-clock hour, 0..=23.
#[cfg(target_arch = "wasm32")]
pub fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}
