use std::{
    fmt,
    ops::{Add, Div},
};

#[derive(Clone, Copy, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

// Component-wise divide, used to normalize pixel coordinates by an input size
impl<T: Div<Output = T>> Div<Vec2<T>> for Vec2<T> {
    type Output = Self;
    fn div(self, rhs: Vec2<T>) -> Self {
        Self {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}

impl Vec2<f32> {
    /// The "no valid position" marker pose models use for undetected joints
    pub const SENTINEL: Vec2<f32> = Vec2::new(-1.0, -1.0);

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}
