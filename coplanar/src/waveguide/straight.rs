//! Straight coplanar-waveguide segments.

use std::f64::consts::PI;

use arcstr::ArcStr;
use geometry::point::Point;
use geometry::polygon::Polygon;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::{Error, Result};
use crate::layers::Layer;
use crate::layout::element::Shape;
use crate::layout::{CellBuilder, HasLayout};

/// A straight segment of a coplanar transmission line.
///
/// The reference point is at the segment's first end, with the centerline
/// running along the positive x-axis. The generated geometry is two gap
/// rails offset `a/2` from the centerline, each of depth `b`, and one
/// protection rectangle of half-height `a/2 + b + margin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Straight {
    /// Segment length.
    pub l: f64,
    /// Gap width: spacing between the inner edges of the two gap rails.
    pub a: f64,
    /// Gap extension: depth of each gap rail.
    pub b: f64,
    /// Clearance added to the protection shape beyond the gap rails.
    pub margin: f64,
}

impl Default for Straight {
    fn default() -> Self {
        Self {
            l: PI,
            a: 10.,
            b: 5.,
            margin: 5.,
        }
    }
}

impl Straight {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.l < 0. {
            return Err(Error::InvalidDimension {
                name: "l",
                value: self.l,
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
        Ok(())
    }
}

impl Block for Straight {
    fn id() -> ArcStr {
        arcstr::literal!("waveguide_straight")
    }

    fn name(&self) -> ArcStr {
        arcstr::format!("waveguide_straight(a={:.1},b={:.1})", self.a, self.b)
    }
}

impl HasLayout for Straight {
    type Data = ();

    fn layout(&self, cell: &mut CellBuilder) -> Result<()> {
        self.validate()?;
        let Self { l, a, b, margin } = *self;

        // Left gap rail.
        cell.draw(Shape::new(
            Layer::Gap,
            Polygon::from_verts(vec![
                Point::new(0., a / 2.),
                Point::new(l, a / 2.),
                Point::new(l, a / 2. + b),
                Point::new(0., a / 2. + b),
            ]),
        ));
        // Right gap rail.
        cell.draw(Shape::new(
            Layer::Gap,
            Polygon::from_verts(vec![
                Point::new(0., -a / 2.),
                Point::new(l, -a / 2.),
                Point::new(l, -a / 2. - b),
                Point::new(0., -a / 2. - b),
            ]),
        ));
        // Protection layer.
        let w = a / 2. + b + margin;
        cell.draw(Shape::new(
            Layer::Protection,
            Polygon::from_verts(vec![
                Point::new(0., -w),
                Point::new(l, -w),
                Point::new(l, w),
                Point::new(0., w),
            ]),
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;

    #[test]
    fn rails_and_protection_have_expected_bounds() {
        let cell = generate(&Straight {
            l: 20.,
            a: 10.,
            b: 5.,
            margin: 5.,
        })
        .unwrap();

        let shapes: Vec<_> = cell
            .raw()
            .elements()
            .iter()
            .filter_map(|e| e.as_shape())
            .collect();
        assert_eq!(shapes.len(), 3);

        let gaps: Vec<_> = shapes.iter().filter(|s| s.layer() == Layer::Gap).collect();
        assert_eq!(gaps.len(), 2);
        let left = gaps.iter().find(|s| s.polygon().top() == 10.).unwrap();
        assert_eq!(left.polygon().bot(), 5.);
        assert_eq!(left.polygon().right(), 20.);
        let right = gaps.iter().find(|s| s.polygon().bot() == -10.).unwrap();
        assert_eq!(right.polygon().top(), -5.);

        let protection = shapes
            .iter()
            .find(|s| s.layer() == Layer::Protection)
            .unwrap();
        assert_eq!(protection.polygon().top(), 15.);
        assert_eq!(protection.polygon().bot(), -15.);
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let err = generate(&Straight {
            l: -1.,
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                name: "l",
                value: -1.
            }
        );

        assert!(generate(&Straight {
            a: 0.,
            ..Default::default()
        })
        .is_err());
    }
}
