//! Curved coplanar-waveguide segments.

use std::f64::consts::PI;

use arcstr::ArcStr;
use geometry::arc::arc;
use geometry::polygon::Polygon;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::layout::element::Shape;
use crate::layout::{CellBuilder, HasLayout};

/// A curved segment of a coplanar transmission line.
///
/// The reference point is at the center of the turn. The centerline follows
/// the circle of radius `ru` counter-clockwise from angle 0 to `alpha`;
/// right-hand bends are realized by mirroring the placed instance, never by
/// a negative sweep.
///
/// Each of the three boundary polygons is a closed ring built from two arc
/// walks, one radius forward and the other back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Turn angle in radians, counter-clockwise, in `(0, π]`.
    pub alpha: f64,
    /// Bend radius of the centerline.
    pub ru: f64,
    /// Gap width: spacing between the inner edges of the two gap rails.
    pub a: f64,
    /// Gap extension: depth of each gap rail.
    pub b: f64,
    /// Clearance added to the protection shape beyond the gap rails.
    pub margin: f64,
    /// Number of sample points per full circle when approximating arcs.
    pub n: usize,
}

impl Default for Curve {
    fn default() -> Self {
        Self {
            alpha: PI,
            ru: 100.,
            a: 10.,
            b: 5.,
            margin: 5.,
            n: 64,
        }
    }
}

impl Curve {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.alpha <= 0. || self.alpha > PI {
            return Err(Error::InvalidDimension {
                name: "alpha",
                value: self.alpha,
            });
        }
        if self.a <= 0. {
            return Err(Error::InvalidDimension {
                name: "a",
                value: self.a,
            });
        }
        if self.b <= 0. {
            return Err(Error::InvalidDimension {
                name: "b",
                value: self.b,
            });
        }
        if self.margin < 0. {
            return Err(Error::InvalidDimension {
                name: "margin",
                value: self.margin,
            });
        }
        if self.n < 1 {
            return Err(Error::InvalidDimension {
                name: "n",
                value: self.n as f64,
            });
        }
        // The innermost ring must have positive radius for the cross section
        // to fit inside the bend.
        if self.ru - self.a / 2. - self.b - self.margin <= 0. {
            return Err(Error::InvalidDimension {
                name: "ru",
                value: self.ru,
            });
        }
        Ok(())
    }
}

impl Block for Curve {
    fn id() -> ArcStr {
        arcstr::literal!("waveguide_curve")
    }

    fn name(&self) -> ArcStr {
        arcstr::format!("waveguide_curve(a={:.1},b={:.1})", self.a, self.b)
    }
}

impl HasLayout for Curve {
    type Data = ();

    fn layout(&self, cell: &mut CellBuilder) -> Result<()> {
        self.validate()?;
        let Self {
            alpha,
            ru,
            a,
            b,
            margin,
            n,
        } = *self;

        // Inner gap ring.
        let mut pts = arc(ru - a / 2., 0., alpha, n);
        pts.extend(arc(ru - a / 2. - b, alpha, 0., n));
        cell.draw(Shape::new(Layer::Gap, Polygon::from_verts(pts)));

        // Outer gap ring.
        let mut pts = arc(ru + a / 2., 0., alpha, n);
        pts.extend(arc(ru + a / 2. + b, alpha, 0., n));
        cell.draw(Shape::new(Layer::Gap, Polygon::from_verts(pts)));

        // Protection ring.
        let mut pts = arc(ru - a / 2. - b - margin, 0., alpha, n);
        pts.extend(arc(ru + a / 2. + b + margin, alpha, 0., n));
        cell.draw(Shape::new(Layer::Protection, Polygon::from_verts(pts)));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;
    use approx::assert_relative_eq;
    use geometry::point::Point;

    #[test]
    fn ring_vertices_lie_on_their_bounding_radii() {
        let curve = Curve {
            alpha: PI / 2.,
            ru: 50.,
            a: 10.,
            b: 6.,
            margin: 5.,
            n: 32,
        };
        let cell = generate(&curve).unwrap();
        let shapes: Vec<_> = cell
            .raw()
            .elements()
            .iter()
            .filter_map(|e| e.as_shape())
            .collect();
        assert_eq!(shapes.len(), 3);

        let bounds = [
            (45., 39.),  // inner gap
            (55., 61.),  // outer gap
            (34., 66.),  // protection
        ];
        for (shape, (r1, r2)) in shapes.iter().zip(bounds) {
            let (lo, hi) = (f64::min(r1, r2), f64::max(r1, r2));
            for pt in shape.polygon().points() {
                let r = pt.length();
                assert!(
                    r > lo - 1e-9 && r < hi + 1e-9,
                    "vertex at radius {r} outside ring [{lo}, {hi}]"
                );
            }
        }
    }

    #[test]
    fn rings_start_on_the_positive_x_axis() {
        let cell = generate(&Curve {
            alpha: PI / 2.,
            ru: 50.,
            a: 10.,
            b: 6.,
            margin: 5.,
            n: 32,
        })
        .unwrap();
        let first = cell.raw().elements()[0].as_shape().unwrap();
        assert_relative_eq!(
            first.polygon().points()[0],
            Point::new(45., 0.),
            max_relative = 1e-12
        );
    }

    #[test]
    fn bend_radius_must_fit_the_cross_section() {
        // ru - a/2 - b - margin = 2 - 5 - 5 - 5 < 0.
        let err = generate(&Curve {
            alpha: PI / 2.,
            ru: 2.,
            a: 10.,
            b: 5.,
            margin: 5.,
            n: 32,
        })
        .unwrap_err();
        assert_eq!(err, Error::InvalidDimension { name: "ru", value: 2. });
    }

    #[test]
    fn sweep_must_be_positive_and_at_most_a_half_turn() {
        assert!(generate(&Curve {
            alpha: 0.,
            ..Default::default()
        })
        .is_err());
        assert!(generate(&Curve {
            alpha: -PI / 2.,
            ..Default::default()
        })
        .is_err());
        assert!(generate(&Curve {
            alpha: 1.5 * PI,
            ..Default::default()
        })
        .is_err());
    }
}
