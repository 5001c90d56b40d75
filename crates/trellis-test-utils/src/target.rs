use trellis_core::geometry::Rect;
use trellis_ui::{Drawable, RenderTarget, WidgetId};

/// Render target recording the exposed widgets in draw order.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    draws: Vec<(WidgetId, Option<Rect<f32>>)>,
    flushes: usize,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(widget, absolute bounds)` for every draw so far.
    pub fn draws(&self) -> &[(WidgetId, Option<Rect<f32>>)] {
        &self.draws
    }

    /// Widgets drawn so far, in order.
    pub fn drawn_ids(&self) -> Vec<WidgetId> {
        self.draws.iter().map(|(id, _)| *id).collect()
    }

    pub fn draw_count(&self) -> usize {
        self.draws.len()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn clear(&mut self) {
        self.draws.clear();
        self.flushes = 0;
    }
}

impl RenderTarget for RecordingTarget {
    fn draw(&mut self, widget: WidgetId, drawable: &Drawable) {
        self.draws.push((widget, drawable.bounds()));
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}
