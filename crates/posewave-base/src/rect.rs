use crate::Vec2;
use std::ops::{Add, Div, Mul, Sub};

/// Axis-aligned rectangle stored as top-left origin plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    pub fn max(&self) -> Vec2<T> {
        self.origin + self.size
    }
}

impl<T: Mul<Output = T> + Copy> Rect<T> {
    pub fn area(&self) -> T {
        self.size.x * self.size.y
    }
}

impl<T: Sub<Output = T> + Div<Output = T> + Copy + From<u8>> Rect<T> {
    /// Build a rect from a center point and size, the box encoding detection heads emit
    pub fn from_center_size(center: Vec2<T>, size: Vec2<T>) -> Self {
        let two = T::from(2u8);
        Self {
            origin: Vec2::new(center.x - size.x / two, center.y - size.y / two),
            size,
        }
    }
}

impl<T: Add<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        let self_max = self.max();
        let other_max = other.max();
        self.origin.x < other_max.x
            && other.origin.x < self_max.x
            && self.origin.y < other_max.y
            && other.origin.y < self_max.y
    }
}

impl<T: Add<Output = T> + Sub<Output = T> + PartialOrd + Copy> Rect<T> {
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        if !self.intersects(other) {
            return None;
        }
        let self_max = self.max();
        let other_max = other.max();

        let min_x = partial_max(self.origin.x, other.origin.x);
        let min_y = partial_max(self.origin.y, other.origin.y);
        let max_x = partial_min(self_max.x, other_max.x);
        let max_y = partial_min(self_max.y, other_max.y);

        Some(Rect {
            origin: Vec2::new(min_x, min_y),
            size: Vec2::new(max_x - min_x, max_y - min_y),
        })
    }
}

fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}
