//! Explicit per-tree environment.

use std::fmt;
use std::rc::Rc;

use crate::metrics::UiMetrics;
use crate::style::{BasicEngine, Engine};
use crate::theme::Theme;

/// Shared environment handed to every widget factory: the styling engine and
/// the work counters.
///
/// Cloning is cheap; clones share the same engine and metrics.
#[derive(Clone)]
pub struct Context {
    inner: Rc<ContextInner>,
}

struct ContextInner {
    engine: Box<dyn Engine>,
    metrics: UiMetrics,
}

impl Context {
    pub fn new(engine: impl Engine + 'static) -> Self {
        Self {
            inner: Rc::new(ContextInner {
                engine: Box::new(engine),
                metrics: UiMetrics::new(),
            }),
        }
    }

    /// Context using a [`BasicEngine`] over `theme`.
    pub fn with_theme(theme: Theme) -> Self {
        Self::new(BasicEngine::new(theme))
    }

    pub fn engine(&self) -> &dyn Engine {
        self.inner.engine.as_ref()
    }

    pub fn metrics(&self) -> &UiMetrics {
        &self.inner.metrics
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::with_theme(Theme::default())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("metrics", &self.inner.metrics.snapshot())
            .finish_non_exhaustive()
    }
}
