use std::fmt;

use crate::constants::EPSILON;
use crate::rendering::format_number;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Euclidean length. Zero for the zero vector, never negative, and finite
    /// for any finite coordinates (no intermediate overflow of `x² + y²`).
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn add(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector with the same direction. A vector whose length is within
    /// `EPSILON` of zero has no direction and maps to `ZERO`.
    pub fn normalize(&self) -> Self {
        let length = self.length();
        if length.abs() < EPSILON {
            Vector2D::ZERO
        } else {
            Vector2D::new(self.x / length, self.y / length)
        }
    }

    /// The two vectors rotated a quarter turn either way: `(-y, x)` and `(y, -x)`.
    pub fn perpendiculars(&self) -> (Vector2D, Vector2D) {
        let p1 = Vector2D::new(-self.y, self.x);
        (p1, p1.scale(-1.0))
    }

    pub fn approx_eq(&self, other: Vector2D) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }

    /// Compares the direction of `other` against both unit perpendiculars of
    /// `self`. Neither input is modified. A zero vector on either side has no
    /// direction and is never perpendicular, including when both are zero.
    pub fn orientation_to(&self, other: Vector2D) -> Orientation {
        let u1 = self.normalize();
        let u2 = other.normalize();
        if u1 == Vector2D::ZERO || u2 == Vector2D::ZERO {
            return Orientation::NotPerpendicular;
        }
        let (p1, p2) = u1.perpendiculars();

        if u2.approx_eq(p1) || u2.approx_eq(p2) {
            Orientation::Perpendicular
        } else {
            Orientation::NotPerpendicular
        }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", format_number(self.x), format_number(self.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Perpendicular,
    NotPerpendicular,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Perpendicular => "PERPENDICULAR",
            Orientation::NotPerpendicular => "NOT PERPENDICULAR",
        }
    }
}
