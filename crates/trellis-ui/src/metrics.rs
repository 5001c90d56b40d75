//! Counters for layout, rendering and dispatch work.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Work counters shared by every widget created from one [`Context`].
///
/// [`Context`]: crate::Context
#[derive(Debug, Default)]
pub struct UiMetrics {
    requisitions: Cell<usize>,
    layout_passes: Cell<usize>,
    drawables_built: Cell<usize>,
    event_deliveries: Cell<usize>,
    layout_time: Cell<Duration>,
}

/// Point-in-time copy of [`UiMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Number of `calculate_requisition` calls (cache misses)
    pub requisitions: usize,
    /// Number of root layout passes
    pub layout_passes: usize,
    /// Number of drawables built by the engine
    pub drawables_built: usize,
    /// Number of (widget, event) deliveries
    pub event_deliveries: usize,
    /// Total time spent in root layout passes
    pub layout_time: Duration,
}

impl UiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_requisition(&self) {
        self.requisitions.set(self.requisitions.get() + 1);
    }

    pub(crate) fn record_drawable(&self) {
        self.drawables_built.set(self.drawables_built.get() + 1);
    }

    pub(crate) fn record_event_delivery(&self) {
        self.event_deliveries.set(self.event_deliveries.get() + 1);
    }

    pub(crate) fn start_layout_pass(&self) -> MetricsTimer<'_> {
        self.layout_passes.set(self.layout_passes.get() + 1);
        MetricsTimer {
            metrics: self,
            start: Instant::now(),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requisitions: self.requisitions.get(),
            layout_passes: self.layout_passes.get(),
            drawables_built: self.drawables_built.get(),
            event_deliveries: self.event_deliveries.get(),
            layout_time: self.layout_time.get(),
        }
    }

    pub fn reset(&self) {
        self.requisitions.set(0);
        self.layout_passes.set(0);
        self.drawables_built.set(0);
        self.event_deliveries.set(0);
        self.layout_time.set(Duration::ZERO);
    }
}

/// Adds the elapsed time to the layout total when dropped.
pub(crate) struct MetricsTimer<'a> {
    metrics: &'a UiMetrics,
    start: Instant,
}

impl Drop for MetricsTimer<'_> {
    fn drop(&mut self) {
        let total = self.metrics.layout_time.get() + self.start.elapsed();
        self.metrics.layout_time.set(total);
    }
}
