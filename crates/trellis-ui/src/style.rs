//! Styling engine: metric lookups and drawable construction.
//!
//! The widget core never hardcodes chrome sizes or colors. It asks the
//! [`Engine`] of its [`Context`](crate::Context) for properties such as
//! [`property::BORDER_WIDTH`] and hands widgets to the engine to turn into
//! draw lists.

use trellis_core::geometry::Rect;
use trellis_core::math::Vec2;

use crate::draw_list::{Color, DrawList, QuadCommand, TextCommand};
use crate::theme::{PropertyValue, Theme};
use crate::widget::Node;
use crate::widgets::{Window, WindowStyle};

/// Well-known property names.
pub mod property {
    pub const BORDER_WIDTH: &str = "BorderWidth";
    pub const GAP: &str = "Gap";
    pub const TITLE_HEIGHT: &str = "TitleHeight";
    pub const HANDLE_SIZE: &str = "HandleSize";
    pub const FONT_SIZE: &str = "FontSize";
    pub const BORDER_COLOR: &str = "BorderColor";
    pub const BACKGROUND_COLOR: &str = "BackgroundColor";
    pub const TITLE_BACKGROUND_COLOR: &str = "TitleBackgroundColor";
    pub const COLOR: &str = "Color";
}

/// Pluggable look-and-feel.
pub trait Engine {
    /// Raw property lookup for `widget`.
    fn property(&self, name: &str, widget: &Node) -> Option<PropertyValue>;

    /// Numeric property, `0.0` when missing.
    fn metric(&self, name: &str, widget: &Node) -> f32 {
        match self.property(name, widget) {
            Some(PropertyValue::Number(value)) => value,
            Some(PropertyValue::Color(_)) => {
                tracing::warn!(
                    property = name,
                    widget = widget.name(),
                    "color property used as a metric"
                );
                0.0
            }
            None => 0.0,
        }
    }

    /// Color property, transparent when missing.
    fn color(&self, name: &str, widget: &Node) -> Color {
        match self.property(name, widget) {
            Some(PropertyValue::Color(color)) => color,
            Some(PropertyValue::Number(_)) => {
                tracing::warn!(
                    property = name,
                    widget = widget.name(),
                    "numeric property used as a color"
                );
                Color::TRANSPARENT
            }
            None => Color::TRANSPARENT,
        }
    }

    /// Build the draw list for `widget`, in the widget's local coordinates.
    fn create_drawable(&self, widget: &Node) -> DrawList;
}

/// Theme-driven engine drawing flat window chrome.
#[derive(Debug, Clone, Default)]
pub struct BasicEngine {
    theme: Theme,
}

impl BasicEngine {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    fn window_chrome(&self, node: &Node, window: &Window, list: &mut DrawList) {
        let size = node.allocation().size();
        let bounds = Rect::new(0.0, 0.0, size.width, size.height);
        let border = self.metric(property::BORDER_WIDTH, node);

        if window.has_style(WindowStyle::BACKGROUND) {
            list.quad(QuadCommand::filled(
                bounds,
                self.color(property::BACKGROUND_COLOR, node),
            ));
        }

        if window.has_style(WindowStyle::TITLEBAR) {
            let title_height = self.metric(property::TITLE_HEIGHT, node);
            let font_size = self.metric(property::FONT_SIZE, node);
            list.quad(QuadCommand::filled(
                Rect::new(0.0, 0.0, size.width, title_height.min(size.height)),
                self.color(property::TITLE_BACKGROUND_COLOR, node),
            ));
            list.text(TextCommand {
                position: Vec2::new(border + 4.0, ((title_height - font_size) / 2.0).max(0.0)),
                text: window.title(),
                color: self.color(property::COLOR, node),
                size: font_size,
            });
        }

        if window.has_style(WindowStyle::RESIZE) {
            let handle = self.metric(property::HANDLE_SIZE, node);
            list.quad(QuadCommand::filled(
                Rect::new(size.width - handle, size.height - handle, handle, handle),
                self.color(property::BORDER_COLOR, node),
            ));
        }

        if border > 0.0 {
            list.quad(QuadCommand::bordered(
                bounds,
                self.color(property::BORDER_COLOR, node),
                border,
            ));
        }
    }
}

impl Engine for BasicEngine {
    fn property(&self, name: &str, widget: &Node) -> Option<PropertyValue> {
        self.theme.get(widget.name(), name).copied()
    }

    fn create_drawable(&self, widget: &Node) -> DrawList {
        let mut list = DrawList::new();
        if let Some(window) = widget.downcast_ref::<Window>() {
            self.window_chrome(widget, window, &mut list);
        }
        list
    }
}
