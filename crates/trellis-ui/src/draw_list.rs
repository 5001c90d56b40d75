//! Backend-agnostic drawables produced by the rendering collaborator.
//!
//! A [`DrawList`] is built in widget-local coordinates (the widget's top-left
//! corner is the origin). The owning node wraps it in a [`Drawable`] whose
//! absolute position can be moved without rebuilding the commands.

use std::cell::Cell;

use serde::Deserialize;
use trellis_core::geometry::Rect;
use trellis_core::math::Vec2;

use crate::error::ThemeError;

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex_str(hex: &str) -> Result<Self, ThemeError> {
        let digits = hex.trim_start_matches('#');
        let invalid = || ThemeError::InvalidColor(hex.to_string());

        if !digits.is_ascii() {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let mut channels = [255u8; 4];
        for (i, channel) in channels.iter_mut().enumerate().take(expanded.len() / 2) {
            *channel =
                u8::from_str_radix(&expanded[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
        }

        let [r, g, b, a] = channels;
        Ok(Self::from_rgba_u8(r, g, b, a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex_str(&value)
    }
}

/// High-level draw command for a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a filled or bordered rectangle
    Quad(QuadCommand),
    /// Draw a run of text
    Text(TextCommand),
}

impl DrawCommand {
    /// Local-space bounds covered by the command.
    pub fn bounds(&self) -> Rect<f32> {
        match self {
            DrawCommand::Quad(q) => q.rect,
            DrawCommand::Text(t) => Rect::new(t.position.x, t.position.y, 0.0, t.size),
        }
    }
}

/// Command to draw a quad (rectangle).
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCommand {
    pub rect: Rect<f32>,
    pub color: Color,
    /// Border thickness (0 = filled, >0 = outline)
    pub border_thickness: f32,
}

impl QuadCommand {
    pub fn filled(rect: Rect<f32>, color: Color) -> Self {
        Self {
            rect,
            color,
            border_thickness: 0.0,
        }
    }

    pub fn bordered(rect: Rect<f32>, color: Color, border_thickness: f32) -> Self {
        Self {
            rect,
            color,
            border_thickness,
        }
    }
}

/// Command to draw a single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCommand {
    pub position: Vec2,
    pub text: String,
    pub color: Color,
    pub size: f32,
}

/// Ordered list of draw commands in widget-local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn quad(&mut self, quad: QuadCommand) {
        self.push(DrawCommand::Quad(quad));
    }

    pub fn text(&mut self, text: TextCommand) {
        self.push(DrawCommand::Text(text));
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Union of all command bounds, `None` for an empty list.
    pub fn bounds(&self) -> Option<Rect<f32>> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|acc, rect| acc.union(&rect))
    }
}

/// Cached render representation of one widget.
#[derive(Debug)]
pub struct Drawable {
    list: DrawList,
    position: Cell<Vec2>,
}

impl Drawable {
    pub fn new(list: DrawList, position: Vec2) -> Self {
        Self {
            list,
            position: Cell::new(position),
        }
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Absolute (device) position of the widget's origin.
    pub fn position(&self) -> Vec2 {
        self.position.get()
    }

    pub(crate) fn set_position(&self, position: Vec2) {
        self.position.set(position);
    }

    /// Absolute bounds, `None` if the drawable has no commands.
    pub fn bounds(&self) -> Option<Rect<f32>> {
        self.list.bounds().map(|rect| rect.translate(self.position()))
    }
}
