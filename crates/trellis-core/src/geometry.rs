use crate::math::Vec2;

/// Axis-aligned rectangle given by its top-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl Rect<f32> {
    pub const ZERO: Self = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub fn from_position_size(position: Vec2, size: Size<f32>) -> Self {
        Rect::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half-open containment: the left/top edges are inside, the
    /// right/bottom edges are not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect<f32>) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn translate(&self, offset: Vec2) -> Self {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Shrink by `amount` on every side. Width and height never go negative.
    pub fn inset(&self, amount: f32) -> Self {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2.0 * amount).max(0.0),
            (self.height - 2.0 * amount).max(0.0),
        )
    }

    /// Union of two rectangles.
    pub fn union(&self, other: &Rect<f32>) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<f32> {
    pub const ZERO: Self = Size::new(0.0, 0.0);

    /// Component-wise maximum.
    pub fn max(self, other: Size<f32>) -> Self {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }
}

impl std::ops::Add for Size<f32> {
    type Output = Size<f32>;

    fn add(self, rhs: Size<f32>) -> Self::Output {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}
