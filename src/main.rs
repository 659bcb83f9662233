use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod config;
mod lifecycle;
mod navigation;
mod shared;
mod source;
#[cfg(test)]
mod testing;
mod utils;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // dioxus may already have installed its own logger
    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    dioxus::launch(app::App);
}
