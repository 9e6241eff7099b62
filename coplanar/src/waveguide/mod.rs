//! Coplanar-waveguide generators.
//!
//! A coplanar waveguide is a signal-carrying trace with a parallel ground
//! gap on each side. The generators here draw the two gap rails and an
//! oversized protection shape; the trace itself is the metal left between
//! the rails.

pub mod curve;
pub mod route;
pub mod straight;

pub use curve::Curve;
pub use route::{route, BendSegment, Segment, StraightSegment};
pub use straight::Straight;

use std::f64::consts::PI;

use arcstr::ArcStr;
use geometry::point::Point;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::error::Result;
use crate::layers::Layer;
use crate::layout::element::Text;
use crate::layout::{CellBuilder, HasLayout};

/// An arbitrary coplanar waveguide following a waypoint path.
///
/// The path is decomposed into straight segments joined by circular corner
/// fillets of radius `ru`; each segment is realized as a placed instance of
/// [`Straight`] or [`Curve`]. A text annotation with the turn angle, center
/// offset, and turn sign is dropped at each fillet center on
/// [`Layer::Annotation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waveguide {
    /// Waypoints of the centerline path; at least two.
    pub path: Vec<Point>,
    /// Gap width: spacing between the inner edges of the two gap rails.
    pub a: f64,
    /// Gap extension: depth of each gap rail.
    pub b: f64,
    /// Bend radius at path corners.
    pub ru: f64,
    /// Number of sample points per full circle when approximating arcs.
    pub n: usize,
    /// Clearance added to the protection shapes beyond the gap rails.
    pub margin: f64,
}

impl Default for Waveguide {
    fn default() -> Self {
        Self {
            path: vec![Point::zero(), Point::new(1., 0.)],
            a: 10.,
            b: 5.,
            ru: 100.,
            n: 64,
            margin: 5.,
        }
    }
}

impl Block for Waveguide {
    fn id() -> ArcStr {
        arcstr::literal!("waveguide")
    }

    fn name(&self) -> ArcStr {
        arcstr::format!("waveguide(a={:.1},b={:.1})", self.a, self.b)
    }
}

impl HasLayout for Waveguide {
    type Data = Vec<Segment>;

    fn layout(&self, cell: &mut CellBuilder) -> Result<Self::Data> {
        let segments = route(&self.path, self.ru)?;
        tracing::debug!(
            segments = segments.len(),
            waypoints = self.path.len(),
            "decomposed waveguide path"
        );

        for segment in &segments {
            match segment {
                Segment::Straight(s) => {
                    cell.instantiate(
                        &Straight {
                            l: s.length,
                            a: self.a,
                            b: self.b,
                            margin: self.margin,
                        },
                        s.loc,
                        s.orientation,
                    )?;
                }
                Segment::Bend(bend) => {
                    cell.instantiate(
                        &Curve {
                            alpha: bend.turn.abs(),
                            ru: bend.radius,
                            a: self.a,
                            b: self.b,
                            margin: self.margin,
                            n: self.n,
                        },
                        bend.loc,
                        bend.orientation,
                    )?;
                    let sign = bend.turn.signum();
                    let offset = sign * bend.radius / ((PI - bend.turn) / 2.).sin();
                    cell.draw(Text::new(
                        Layer::Annotation,
                        arcstr::format!("{:.6}, {:.6}, {:.0}", bend.turn, offset, sign),
                        bend.loc,
                    ));
                }
            }
        }
        Ok(segments)
    }
}
