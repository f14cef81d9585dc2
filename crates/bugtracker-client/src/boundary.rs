use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::view::View;

pub const FALLBACK_MESSAGE: &str = "Something went wrong.";

/// Catches panics raised while rendering and shows a fallback alert instead.
///
/// Once tripped the boundary keeps showing the fallback until [`reset`] is
/// called, so a broken subtree is not re-rendered on every frame.
///
/// [`reset`]: ErrorBoundary::reset
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    failure: Option<String>,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render<F>(&mut self, child: F) -> View
    where
        F: FnOnce() -> View,
    {
        if self.failure.is_some() {
            return Self::fallback();
        }

        match panic::catch_unwind(AssertUnwindSafe(child)) {
            Ok(view) => view,
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                tracing::error!("[ErrorBoundary] render failed: {}", detail);
                self.failure = Some(detail);
                Self::fallback()
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.failure.is_some()
    }

    /// The panic message that tripped the boundary, if any.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    pub fn reset(&mut self) {
        self.failure = None;
    }

    fn fallback() -> View {
        View::Alert(FALLBACK_MESSAGE.to_string())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
