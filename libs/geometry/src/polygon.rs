//! Floating-point coordinate polygons.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::transform::{TransformMut, Transformation, TranslateMut};

/// A closed polygon, with vertex coordinates given in drawing order.
///
/// The closing edge from the last vertex back to the first is implied.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Polygon {
    /// Vector of points that make up the polygon.
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon with the given vertices.
    pub fn from_verts(vec: Vec<Point>) -> Self {
        Self { points: vec }
    }

    /// Returns the vector of points representing the polygon.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of vertices in the polygon.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the bottom y-coordinate in the polygon.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let polygon = Polygon::from_verts(vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 2.),
    ///     Point::new(-4., 5.),
    /// ]);
    /// assert_eq!(polygon.bot(), 0.);
    /// ```
    pub fn bot(&self) -> f64 {
        self.points.iter().map(|point| point.y).fold(f64::INFINITY, f64::min)
    }

    /// Returns the top y-coordinate in the polygon.
    pub fn top(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the leftmost x-coordinate in the polygon.
    pub fn left(&self) -> f64 {
        self.points.iter().map(|point| point.x).fold(f64::INFINITY, f64::min)
    }

    /// Returns the rightmost x-coordinate in the polygon.
    pub fn right(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns the centroid of the polygon's vertices.
    pub fn center(&self) -> Point {
        let n = self.points.len() as f64;
        let x = self.points.iter().map(|point| point.x).sum::<f64>() / n;
        let y = self.points.iter().map(|point| point.y).sum::<f64>() / n;
        Point::new(x, y)
    }
}

impl TranslateMut for Polygon {
    fn translate_mut(&mut self, p: Point) {
        self.points.translate_mut(p);
    }
}

impl TransformMut for Polygon {
    fn transform_mut(&mut self, trans: Transformation) {
        self.points.transform_mut(trans);
    }
}
