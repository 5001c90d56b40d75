//! Render targets receiving exposed drawables.

use trellis_core::geometry::Rect;

use crate::draw_list::Drawable;
use crate::widget::WidgetId;

/// Sink for exposed widgets.
///
/// `draw` is called once per visible widget in tree order; `flush` once per
/// top-level expose.
pub trait RenderTarget {
    fn draw(&mut self, widget: WidgetId, drawable: &Drawable);

    fn flush(&mut self) {}
}

/// Forwards only drawables intersecting a viewport.
///
/// Drawables without commands are always culled.
pub struct CullingTarget<'a, T: ?Sized + RenderTarget> {
    inner: &'a mut T,
    viewport: Rect<f32>,
    culled: usize,
}

impl<'a, T: ?Sized + RenderTarget> CullingTarget<'a, T> {
    pub fn new(inner: &'a mut T, viewport: Rect<f32>) -> Self {
        Self {
            inner,
            viewport,
            culled: 0,
        }
    }

    /// Number of drawables skipped so far.
    pub fn culled(&self) -> usize {
        self.culled
    }
}

impl<T: ?Sized + RenderTarget> RenderTarget for CullingTarget<'_, T> {
    fn draw(&mut self, widget: WidgetId, drawable: &Drawable) {
        match drawable.bounds() {
            Some(bounds) if bounds.intersects(&self.viewport) => self.inner.draw(widget, drawable),
            _ => self.culled += 1,
        }
    }

    fn flush(&mut self) {
        self.inner.flush();
    }
}
