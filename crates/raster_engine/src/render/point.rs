//! Interpolatable vertex record used by the CPU rasterizer
//!
//! A [`Point`] carries every per-vertex attribute as a homogeneous 4-vector.
//! Rasterizing a triangle's interior is nothing more than blending the three
//! corner points with barycentric weights, so the only arithmetic a point
//! needs is scaling and component-wise addition.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use approx::{AbsDiffEq, RelativeEq};

use crate::foundation::math::{Vec3, Vec4};

/// Single vertex with position, color, normal and texture coordinate
///
/// All four attributes take part identically in [`Point::scale`] and
/// [`Point::add`], so any affine combination of points interpolates every
/// attribute at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Homogeneous position (w = 1 for loaded vertices)
    pub position: Vec4,

    /// RGBA color
    pub color: Vec4,

    /// Normal vector (w = 0)
    pub normal: Vec4,

    /// Texture coordinate (u, v, w, unused)
    pub uv: Vec4,
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            normal: Vec4::zeros(),
            uv: Vec4::zeros(),
        }
    }
}

impl Point {
    /// Create a point from all four attributes
    pub fn new(position: Vec4, color: Vec4, normal: Vec4, uv: Vec4) -> Self {
        Self { position, color, normal, uv }
    }

    /// Create a point at `position` with the default (opaque white) color
    pub fn from_position(position: Vec4) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// The additive identity: every component of every attribute is zero
    pub fn zero() -> Self {
        Self {
            position: Vec4::zeros(),
            color: Vec4::zeros(),
            normal: Vec4::zeros(),
            uv: Vec4::zeros(),
        }
    }

    /// Replace the color
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Replace the normal
    pub fn with_normal(mut self, normal: Vec4) -> Self {
        self.normal = normal;
        self
    }

    /// Replace the texture coordinate
    pub fn with_uv(mut self, uv: Vec4) -> Self {
        self.uv = uv;
        self
    }

    /// Multiply every attribute component-wise by `factor`
    #[must_use]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            position: self.position * factor,
            color: self.color * factor,
            normal: self.normal * factor,
            uv: self.uv * factor,
        }
    }

    /// Sum every attribute component-wise with `other`
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            position: self.position + other.position,
            color: self.color + other.color,
            normal: self.normal + other.normal,
            uv: self.uv + other.uv,
        }
    }

    /// Linear interpolation, `self` at `t = 0` and `other` at `t = 1`
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.scale(1.0 - t).add(other.scale(t))
    }

    /// Blend three triangle corners as `a * w.x + b * w.y + c * w.z`
    ///
    /// The weights are used as given. They must sum to 1 for the result to be
    /// a true interpolation.
    pub fn barycentric(a: Self, b: Self, c: Self, weights: Vec3) -> Self {
        a.scale(weights.x)
            .add(b.scale(weights.y))
            .add(c.scale(weights.z))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Point::add(self, rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = Point::add(*self, rhs);
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs.scale(self)
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(&other.position, epsilon)
            && self.color.abs_diff_eq(&other.color, epsilon)
            && self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.uv.abs_diff_eq(&other.uv, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.position.relative_eq(&other.position, epsilon, max_relative)
            && self.color.relative_eq(&other.color, epsilon, max_relative)
            && self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.uv.relative_eq(&other.uv, epsilon, max_relative)
    }
}
