//! Transformation types and traits.

use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::point::Point;

/// A transformation representing a translation, rotation, and/or reflection
/// of geometry.
///
/// This object does not support scaling of geometry, and as such all
/// transformation matrices should be unitary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transformation {
    /// The transformation matrix.
    pub(crate) mat: [[f64; 2]; 2],
    /// The x-y translation applied after the transformation.
    pub(crate) b: Point,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// Returns the identity transform, leaving any transformed object unmodified.
    pub fn identity() -> Self {
        Self {
            mat: [[1., 0.], [0., 1.]],
            b: Point::zero(),
        }
    }

    /// Returns a translation by `(x,y)`.
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            mat: [[1., 0.], [0., 1.]],
            b: Point::new(x, y),
        }
    }

    /// Returns a rotation by `angle` degrees counter-clockwise about the origin.
    pub fn rotate(angle: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            mat: [[cos, -sin], [sin, cos]],
            b: Point::zero(),
        }
    }

    /// Returns a reflection about the x-axis.
    pub fn reflect_vert() -> Self {
        Self {
            mat: [[1., 0.], [0., -1.]],
            b: Point::zero(),
        }
    }

    /// Creates a transform from only an offset.
    ///
    /// The resulting transformation will apply only a translation
    /// (i.e. no rotations/reflections).
    pub fn from_offset(offset: Point) -> Self {
        Self::from_offset_and_orientation(offset, Orientation::identity())
    }

    /// Creates a transform from an offset and [`Orientation`].
    ///
    /// The reflection (if any) is applied first, the rotation second, and the
    /// translation last.
    pub fn from_offset_and_orientation(offset: Point, orientation: Orientation) -> Self {
        let mut trans = Self::rotate(orientation.angle());
        if orientation.reflect_vert() {
            trans = Self::cascade(trans, Self::reflect_vert());
        }
        Self {
            mat: trans.mat,
            b: offset,
        }
    }

    /// Create a new [`Transformation`] that is the cascade of `parent` and `child`.
    ///
    /// "Parents" and "children" refer to typical layout-instance hierarchies,
    /// in which each level of instance has a nested set of transformations
    /// relative to its top-level parent.
    ///
    /// Note this operation *is not* commutative.
    pub fn cascade(parent: Transformation, child: Transformation) -> Transformation {
        let mat = matmul(&parent.mat, &child.mat);
        let mut b = matvec(&parent.mat, child.b);
        b += parent.b;
        Self { mat, b }
    }

    /// Applies this transformation to the given point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let trans = Transformation::cascade(
    ///     Transformation::translate(5., 10.),
    ///     Transformation::rotate(90.),
    /// );
    /// assert_abs_diff_eq!(trans.apply(Point::new(1., 0.)), Point::new(5., 11.), epsilon = 1e-12);
    /// ```
    pub fn apply(&self, p: Point) -> Point {
        matvec(&self.mat, p) + self.b
    }

    /// The point representing the translation of this transformation.
    pub fn offset_point(&self) -> Point {
        self.b
    }

    /// Returns an [`Orientation`] corresponding to this transformation.
    ///
    /// Captures the rotation and reflection encoded by the transformation
    /// matrix, discarding the translation.
    pub fn orientation(&self) -> Orientation {
        let det = self.mat[0][0] * self.mat[1][1] - self.mat[0][1] * self.mat[1][0];
        let angle = self.mat[1][0].atan2(self.mat[0][0]).to_degrees();
        Orientation::from_reflect_and_angle(det < 0., angle)
    }

    /// Returns the inverse [`Transformation`] of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// use approx::assert_abs_diff_eq;
    ///
    /// let trans = Transformation::cascade(
    ///     Transformation::rotate(90.),
    ///     Transformation::translate(5., 10.),
    /// );
    /// let inv = trans.inv();
    /// let p = Point::new(1., 2.);
    /// assert_abs_diff_eq!(inv.apply(trans.apply(p)), p, epsilon = 1e-12);
    /// ```
    pub fn inv(&self) -> Transformation {
        // Unitary matrices invert by transposition.
        let inv = [
            [self.mat[0][0], self.mat[1][0]],
            [self.mat[0][1], self.mat[1][1]],
        ];
        let invb = matvec(&inv, self.b);
        Self {
            mat: inv,
            b: -invb,
        }
    }
}

impl From<Orientation> for Transformation {
    fn from(value: Orientation) -> Self {
        Self::from_offset_and_orientation(Point::zero(), value)
    }
}

/// Multiplies two 2x2 matrices, returning a new 2x2 matrix.
fn matmul(a: &[[f64; 2]; 2], b: &[[f64; 2]; 2]) -> [[f64; 2]; 2] {
    [
        [
            a[0][0] * b[0][0] + a[0][1] * b[1][0],
            a[0][0] * b[0][1] + a[0][1] * b[1][1],
        ],
        [
            a[1][0] * b[0][0] + a[1][1] * b[1][0],
            a[1][0] * b[0][1] + a[1][1] * b[1][1],
        ],
    ]
}

/// Multiplies a 2x2 matrix by a point interpreted as a column vector.
fn matvec(a: &[[f64; 2]; 2], b: Point) -> Point {
    Point::new(
        a[0][0] * b.x + a[0][1] * b.y,
        a[1][0] * b.x + a[1][1] * b.y,
    )
}

/// Trait for specifying how an object is changed by a translation.
pub trait TranslateMut {
    /// Translates the shape by a [`Point`] through mutation.
    fn translate_mut(&mut self, p: Point);
}

/// Trait for specifying how an object is changed by a translation.
///
/// Takes in an owned copy of the shape and returns the translated version.
pub trait Translate: TranslateMut + Sized {
    /// Translates the shape by a [`Point`] through mutation.
    ///
    /// Creates a new shape at the translated location.
    fn translate(mut self, p: Point) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<T: TranslateMut + Sized> Translate for T {}

/// Trait for specifying how an object is changed by a [`Transformation`].
pub trait TransformMut {
    /// Applies matrix-vector [`Transformation`] `trans`.
    fn transform_mut(&mut self, trans: Transformation);
}

/// Trait for specifying how an object is changed by a [`Transformation`].
///
/// Takes in an owned copy of the shape and returns the transformed version.
pub trait Transform: TransformMut + Sized {
    /// Applies matrix-vector [`Transformation`] `trans`.
    ///
    /// Creates a new shape at the transformed location.
    fn transform(mut self, trans: Transformation) -> Self {
        self.transform_mut(trans);
        self
    }
}

impl<T: TransformMut + Sized> Transform for T {}

impl<T: TranslateMut> TranslateMut for Vec<T> {
    fn translate_mut(&mut self, p: Point) {
        for item in self.iter_mut() {
            item.translate_mut(p);
        }
    }
}

impl<T: TransformMut> TransformMut for Vec<T> {
    fn transform_mut(&mut self, trans: Transformation) {
        for item in self.iter_mut() {
            item.transform_mut(trans);
        }
    }
}
