//! Small fixed-arity vector value types.
//!
//! `Vec2` carries sample-space coordinates; `Grad` is a 3-component gradient
//! direction of which only x and y participate in 2D sampling.

use std::ops::Sub;

/// A 2D point or offset in sample space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply `f` to each component, producing a new vector.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A gradient direction assigned to a lattice corner.
///
/// Gradients are cube edge midpoints with components in {-1, 0, 1}; the z
/// component is carried for the fixed gradient set but 2D sampling only ever
/// dots x and y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grad {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Grad {
    /// Create a gradient from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product against a 2D offset; z is ignored.
    #[inline]
    pub fn dot2(&self, x: f64, y: f64) -> f64 {
        self.x * x + self.y * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_applies_per_component() {
        let v = Vec2::new(1.7, -2.3).map(f64::floor);
        assert_eq!(v, Vec2::new(1.0, -3.0));
    }

    #[test]
    fn test_sub_is_componentwise() {
        let d = Vec2::new(1.5, 2.25) - Vec2::new(1.0, 2.0);
        assert_eq!(d, Vec2::new(0.5, 0.25));
    }

    #[test]
    fn test_dot2_ignores_z() {
        let g = Grad::new(1.0, -1.0, 1.0);
        assert_eq!(g.dot2(0.5, 0.25), 0.25);
        let g = Grad::new(0.0, 1.0, -1.0);
        assert_eq!(g.dot2(100.0, 0.5), 0.5);
    }
}
