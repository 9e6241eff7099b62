//! 2-D points.

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A point in two-dimensional space.
///
/// Also used as a 2-D vector; the vector-flavored methods
/// ([`length`](Point::length), [`dot`](Point::dot), [`cross`](Point::cross))
/// treat the point as a displacement from the origin.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0.0, 0.0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Returns the unit vector at the given angle (radians, counter-clockwise
    /// from the positive x-axis).
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// use approx::assert_abs_diff_eq;
    /// use std::f64::consts::PI;
    ///
    /// assert_abs_diff_eq!(Point::from_angle(PI / 2.), Point::new(0., 1.), epsilon = 1e-12);
    /// ```
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// The Euclidean length of this point interpreted as a vector.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// The Euclidean distance from this point to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (other - *self).length()
    }

    /// The angle of this vector in radians, in the range `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The dot product of this vector with `other`.
    pub fn dot(&self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z-component of the cross product of this vector with `other`.
    pub fn cross(&self, other: Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// The sign of the cross product with `other`.
    ///
    /// Returns `1.` when `other` points to the left of this vector
    /// (counter-clockwise turn), `-1.` when it points to the right, and `0.`
    /// when the vectors are collinear.
    pub fn cross_sign(&self, other: Point) -> f64 {
        let c = self.cross(other);
        if c == 0. {
            0.
        } else {
            c.signum()
        }
    }

    /// This vector scaled to unit length.
    ///
    /// The zero vector is returned unchanged.
    pub fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0. {
            *self
        } else {
            *self / len
        }
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl TransformMut for Point {
    fn transform_mut(&mut self, trans: Transformation) {
        *self = trans.apply(*self);
    }
}

impl Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Point {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn cross_sign_matches_turn_direction() {
        let east = Point::new(1., 0.);
        assert_eq!(east.cross_sign(Point::new(0., 1.)), 1.);
        assert_eq!(east.cross_sign(Point::new(0., -1.)), -1.);
        assert_eq!(east.cross_sign(Point::new(2., 0.)), 0.);
        assert_eq!(east.cross_sign(Point::new(-3., 0.)), 0.);
    }

    #[test]
    fn angle_and_from_angle_are_inverse() {
        for angle in [0., PI / 6., PI / 2., 3. * PI / 4., -PI / 3.] {
            assert_abs_diff_eq!(Point::from_angle(angle).angle(), angle, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalized_handles_zero_vector() {
        assert_eq!(Point::zero().normalized(), Point::zero());
        assert_abs_diff_eq!(Point::new(3., 4.).normalized().length(), 1., epsilon = 1e-12);
    }
}
