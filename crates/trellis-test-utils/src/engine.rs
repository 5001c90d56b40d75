use std::sync::Arc;

use parking_lot::Mutex;
use trellis_core::alloc::HashMap;
use trellis_ui::style::property;
use trellis_ui::theme::WILDCARD;
use trellis_ui::{BasicEngine, DrawList, Engine, Node, PropertyValue, Theme, WidgetId};

/// Engine wrapper counting `create_drawable` calls per widget.
///
/// Clones share the same counters, so a test can keep one clone while the
/// context owns the other.
#[derive(Clone, Default)]
pub struct CountingEngine {
    inner: Arc<BasicEngine>,
    builds: Arc<Mutex<HashMap<WidgetId, usize>>>,
}

impl CountingEngine {
    pub fn new(theme: Theme) -> Self {
        Self {
            inner: Arc::new(BasicEngine::new(theme)),
            builds: Arc::default(),
        }
    }

    /// Number of drawables built for `widget`.
    pub fn builds_for(&self, widget: WidgetId) -> usize {
        self.builds.lock().get(&widget).copied().unwrap_or(0)
    }

    /// Number of drawables built for all widgets.
    pub fn total_builds(&self) -> usize {
        self.builds.lock().values().sum()
    }

    pub fn reset(&self) {
        self.builds.lock().clear();
    }
}

impl Engine for CountingEngine {
    fn property(&self, name: &str, widget: &Node) -> Option<PropertyValue> {
        self.inner.property(name, widget)
    }

    fn create_drawable(&self, widget: &Node) -> DrawList {
        *self.builds.lock().entry(widget.id()).or_insert(0) += 1;
        self.inner.create_drawable(widget)
    }
}

/// Theme with only the chrome metrics set, all on the wildcard selector.
pub fn metrics_theme(border: f32, gap: f32, title_height: f32, handle_size: f32) -> Theme {
    let mut theme = Theme::empty();
    theme
        .set(WILDCARD, property::BORDER_WIDTH, border)
        .set(WILDCARD, property::GAP, gap)
        .set(WILDCARD, property::TITLE_HEIGHT, title_height)
        .set(WILDCARD, property::HANDLE_SIZE, handle_size);
    theme
}
