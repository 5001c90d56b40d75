//! Property-based themes.
//!
//! A theme maps `(widget name, property name)` to a value. Lookups for a
//! widget fall back to the `*` selector when the widget's own section does
//! not define the property.
//!
//! # Example
//!
//! ```
//! use trellis_ui::{Theme, PropertyValue};
//! use trellis_ui::style::property;
//!
//! let theme = Theme::from_toml_str(r##"
//!     ["*"]
//!     BorderWidth = 2
//!
//!     [Window]
//!     TitleHeight = 24.0
//!     TitleBackgroundColor = "#335577"
//! "##).unwrap();
//!
//! assert_eq!(theme.get("Window", property::BORDER_WIDTH), Some(&PropertyValue::Number(2.0)));
//! assert_eq!(theme.get("Window", property::TITLE_HEIGHT), Some(&PropertyValue::Number(24.0)));
//! ```

use std::path::Path;

use serde::Deserialize;
use trellis_core::alloc::HashMap;

use crate::draw_list::Color;
use crate::error::ThemeResult;
use crate::style::property;

/// Selector matching every widget.
pub const WILDCARD: &str = "*";

/// Value of a single theme property.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f32),
    Color(Color),
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        PropertyValue::Color(value)
    }
}

/// Property table keyed by selector then property name.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    selectors: HashMap<String, HashMap<String, PropertyValue>>,
}

impl Theme {
    /// A theme without any properties.
    pub fn empty() -> Self {
        Self {
            selectors: HashMap::new(),
        }
    }

    /// Parse a theme from TOML source. Each table is a selector.
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a theme file from disk.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set a property for `selector`.
    pub fn set(
        &mut self,
        selector: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> &mut Self {
        self.selectors
            .entry(selector.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// Look up `name` for a widget called `widget_name`.
    pub fn get(&self, widget_name: &str, name: &str) -> Option<&PropertyValue> {
        self.selectors
            .get(widget_name)
            .and_then(|properties| properties.get(name))
            .or_else(|| {
                self.selectors
                    .get(WILDCARD)
                    .and_then(|properties| properties.get(name))
            })
    }

    /// Overlay `other` on top of `self`; properties in `other` win.
    pub fn merge(&mut self, other: Theme) {
        for (selector, properties) in other.selectors {
            self.selectors.entry(selector).or_default().extend(properties);
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self::empty();
        theme
            .set(WILDCARD, property::BORDER_WIDTH, 1.0)
            .set(WILDCARD, property::GAP, 2.0)
            .set(WILDCARD, property::BORDER_COLOR, Color::from_rgb_u8(60, 60, 60))
            .set(WILDCARD, property::BACKGROUND_COLOR, Color::from_rgb_u8(30, 30, 30))
            .set(WILDCARD, property::COLOR, Color::from_rgb_u8(255, 255, 255))
            .set("Window", property::TITLE_HEIGHT, 20.0)
            .set("Window", property::HANDLE_SIZE, 10.0)
            .set("Window", property::FONT_SIZE, 14.0)
            .set(
                "Window",
                property::TITLE_BACKGROUND_COLOR,
                Color::from_rgb_u8(60, 120, 200),
            );
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    #[test]
    fn test_wildcard_fallback() {
        let mut theme = Theme::empty();
        theme.set(WILDCARD, "Gap", 3.0).set("Window", "Gap", 5.0);

        assert_eq!(theme.get("Window", "Gap"), Some(&PropertyValue::Number(5.0)));
        assert_eq!(theme.get("Spacer", "Gap"), Some(&PropertyValue::Number(3.0)));
        assert_eq!(theme.get("Spacer", "Missing"), None);
    }

    #[test]
    fn test_default_metrics() {
        let theme = Theme::default();
        assert_eq!(
            theme.get("Window", property::TITLE_HEIGHT),
            Some(&PropertyValue::Number(20.0))
        );
        assert_eq!(
            theme.get("Bin", property::BORDER_WIDTH),
            Some(&PropertyValue::Number(1.0))
        );
        assert_eq!(theme.get("Bin", property::TITLE_HEIGHT), None);
    }

    #[test]
    fn test_parse_numbers_and_colors() {
        let theme = Theme::from_toml_str(
            r##"
            ["*"]
            Gap = 4
            BorderColor = "#ff0000"
            "##,
        )
        .expect("valid theme");

        assert_eq!(theme.get("Window", "Gap"), Some(&PropertyValue::Number(4.0)));
        assert_eq!(
            theme.get("Window", "BorderColor"),
            Some(&PropertyValue::Color(Color::rgb(1.0, 0.0, 0.0)))
        );
    }

    #[test]
    fn test_parse_rejects_bad_color() {
        let result = Theme::from_toml_str(
            r##"
            [Window]
            BorderColor = "#zz"
            "##,
        );
        assert!(matches!(result, Err(ThemeError::Parse(_))));
    }

    #[test]
    fn test_merge_overrides() {
        let mut base = Theme::default();
        let mut overlay = Theme::empty();
        overlay.set("Window", property::TITLE_HEIGHT, 32.0);
        base.merge(overlay);

        assert_eq!(
            base.get("Window", property::TITLE_HEIGHT),
            Some(&PropertyValue::Number(32.0))
        );
        assert_eq!(
            base.get("Window", property::HANDLE_SIZE),
            Some(&PropertyValue::Number(10.0))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = Theme::load("/definitely/not/here.toml");
        assert!(matches!(result, Err(ThemeError::Io(_))));
    }
}
