//! One-shot load per mounted view.
//!
//! Views drive their fetch with `use_resource`: the resource task belongs to
//! the view's scope, so it is polled once at mount, resolves at most once and
//! is dropped together with the view. A response that would arrive after the
//! view is gone is never delivered.

use std::future::Future;

use dioxus::logger::tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Pending,
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(v) => Some(v),
            LoadState::Pending => None,
        }
    }
}

/// A resource value: `None` until the load finishes.
impl<T> From<Option<T>> for LoadState<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => LoadState::Ready(v),
            None => LoadState::Pending,
        }
    }
}

/// Awaits the single request of a mount and yields its payload unchanged.
///
/// No retry, no timeout. A failed request is logged and the returned future
/// never completes, so the view stays pending exactly as if the request had
/// never answered.
pub async fn load<T, F>(view: &'static str, request: F) -> T
where
    F: Future<Output = anyhow::Result<T>>,
{
    debug!(view, "load issued");
    match request.await {
        Ok(payload) => {
            debug!(view, "load ready");
            payload
        }
        Err(e) => {
            warn!(view, "request failed, staying pending: {e:#}");
            std::future::pending().await
        }
    }
}
