//! Waypoint-path decomposition into straight and bend segments.

use std::f64::consts::{PI, TAU};

use geometry::orientation::Orientation;
use geometry::point::Point;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spatial and angular tolerance for degeneracy and feasibility checks.
pub const TOL: f64 = 1e-9;

/// A straight-segment descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightSegment {
    /// Length of the segment.
    pub length: f64,
    /// Location of the segment's first end.
    pub loc: Point,
    /// Placement orientation; the segment runs along the rotated x-axis.
    pub orientation: Orientation,
}

/// A bend-segment descriptor for a corner fillet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendSegment {
    /// Signed turn angle in radians; positive turns left.
    pub turn: f64,
    /// Bend radius of the fillet arc.
    pub radius: f64,
    /// Center of the fillet arc.
    pub loc: Point,
    /// Placement orientation; reflected for right-hand turns, so the
    /// canonical counter-clockwise curve cell bends the correct way.
    pub orientation: Orientation,
}

/// A segment of a decomposed waveguide path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A straight run between corners.
    Straight(StraightSegment),
    /// A corner fillet.
    Bend(BendSegment),
}

impl Segment {
    /// Returns the contained straight descriptor, if this segment is one.
    pub fn as_straight(&self) -> Option<&StraightSegment> {
        match self {
            Segment::Straight(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained bend descriptor, if this segment is one.
    pub fn as_bend(&self) -> Option<&BendSegment> {
        match self {
            Segment::Bend(b) => Some(b),
            _ => None,
        }
    }
}

/// Normalizes a raw angle difference into `(-π, π]`.
///
/// Raw `atan2` differences jump across the ±π branch cut; the fillet
/// formulas need the actual turn.
fn normalize_turn(delta: f64) -> f64 {
    let wrapped = geometry::wrap_angle_rad(delta);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Decomposes a waypoint path into straight segments and corner fillets of
/// radius `ru`.
///
/// For every interior waypoint, a circular arc of radius `ru` is inscribed
/// at the corner, tangent to both incident legs. The preceding straight
/// segment is shortened by the tangent cut distance
/// `ru / tan((π − Δ)/2)` on each side, and the fillet center sits
/// `ru / sin((π − Δ)/2)` from the corner along the bisector, where Δ is the
/// signed turn angle. One trailing straight segment runs from the last
/// tangent point to the final waypoint.
///
/// # Errors
///
/// * [`Error::DegeneratePath`] for paths with fewer than two waypoints or
///   coincident consecutive waypoints.
/// * [`Error::UndefinedCornerGeometry`] for collinear legs (a zero-angle
///   arc) and antiparallel legs (the fillet formulas divide by `sin(0)`).
/// * [`Error::InfeasibleBendRadius`] when a fillet's cut distance exceeds
///   the leg length available to it.
/// * [`Error::InvalidDimension`] for a non-positive bend radius.
pub fn route(points: &[Point], ru: f64) -> Result<Vec<Segment>> {
    if ru <= 0. {
        return Err(Error::InvalidDimension {
            name: "ru",
            value: ru,
        });
    }
    if points.len() < 2 {
        return Err(Error::DegeneratePath {
            reason: "fewer than two waypoints",
        });
    }
    for w in points.windows(2) {
        if w[0].distance_to(w[1]) <= TOL {
            return Err(Error::DegeneratePath {
                reason: "coincident consecutive waypoints",
            });
        }
    }

    let mut segments = Vec::new();
    let mut segment_last = points[0];

    for i in 0..points.len() - 2 {
        let crossing = points[i + 1];
        let v1 = crossing - points[i];
        let v2 = points[i + 2] - crossing;
        let alpha1 = v1.angle();
        let alpha2 = v2.angle();
        let turn = normalize_turn(alpha2 - alpha1);
        if turn.abs() <= TOL || turn.abs() >= PI - TOL {
            return Err(Error::UndefinedCornerGeometry {
                vertex: i + 1,
                turn,
            });
        }
        let sign = v1.cross_sign(v2);

        // Tangent-circle fillet at the corner.
        let half = (PI - turn) / 2.;
        let cut = sign * ru / half.tan();
        let dist_center = sign * ru / half.sin();
        let center = crossing + Point::from_angle(half + alpha2) * dist_center;

        // Straight run up to the incoming tangent point.
        let available = segment_last.distance_to(crossing);
        let length = available - cut;
        if length < -TOL {
            return Err(Error::InfeasibleBendRadius {
                vertex: i + 1,
                required: cut,
                available,
            });
        }
        segments.push(Segment::Straight(StraightSegment {
            length: length.max(0.),
            loc: segment_last,
            orientation: Orientation::from_angle(alpha1.to_degrees()),
        }));

        // The outgoing cut must fit within the next leg.
        let outgoing = v2.length();
        if cut > outgoing + TOL {
            return Err(Error::InfeasibleBendRadius {
                vertex: i + 1,
                required: cut,
                available: outgoing,
            });
        }

        segments.push(Segment::Bend(BendSegment {
            turn,
            radius: ru,
            loc: center,
            orientation: Orientation::from_reflect_and_angle(
                sign < 0.,
                alpha1.to_degrees() - sign * 90.,
            ),
        }));

        segment_last = crossing + v2.normalized() * cut;
    }

    // Trailing straight segment to the final waypoint.
    let end = *points.last().unwrap();
    let length = segment_last.distance_to(end);
    let angle = (end - segment_last).angle();
    segments.push(Segment::Straight(StraightSegment {
        length,
        loc: segment_last,
        orientation: Orientation::from_angle(angle.to_degrees()),
    }));

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn two_point_path_is_a_single_straight_segment() {
        let segments = route(&[Point::zero(), Point::new(3., 4.)], 10.).unwrap();
        assert_eq!(segments.len(), 1);
        let s = segments[0].as_straight().unwrap();
        assert_relative_eq!(s.length, 5., max_relative = 1e-12);
        assert_eq!(s.loc, Point::zero());
        assert_abs_diff_eq!(
            s.orientation.angle(),
            (4f64 / 3.).atan().to_degrees(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn right_angle_corner_cuts_exactly_ru() {
        // tan((π − π/2)/2) = 1, so the cut distance equals the bend radius.
        let segments = route(
            &[Point::zero(), Point::new(10., 0.), Point::new(10., 10.)],
            2.,
        )
        .unwrap();
        assert_eq!(segments.len(), 3);

        let first = segments[0].as_straight().unwrap();
        assert_relative_eq!(first.length, 8., max_relative = 1e-12);
        assert_eq!(first.orientation.angle(), 0.);

        let bend = segments[1].as_bend().unwrap();
        assert_relative_eq!(bend.turn, PI / 2., max_relative = 1e-12);
        assert_eq!(bend.radius, 2.);
        // Center offset from the corner is 2/sin(π/4) = 2√2.
        assert_relative_eq!(
            bend.loc.distance_to(Point::new(10., 0.)),
            2. * 2f64.sqrt(),
            max_relative = 1e-12
        );
        assert_abs_diff_eq!(bend.loc, Point::new(8., 2.), epsilon = 1e-9);
        assert!(!bend.orientation.reflect_vert());
        assert_abs_diff_eq!(bend.orientation.angle(), 270., epsilon = 1e-9);

        let last = segments[2].as_straight().unwrap();
        assert_relative_eq!(last.length, 8., max_relative = 1e-12);
        assert_abs_diff_eq!(last.loc, Point::new(10., 2.), epsilon = 1e-9);
        assert_abs_diff_eq!(last.orientation.angle(), 90., epsilon = 1e-9);
    }

    #[test]
    fn right_turns_are_mirrored() {
        let segments = route(
            &[Point::zero(), Point::new(10., 0.), Point::new(10., -10.)],
            2.,
        )
        .unwrap();
        let bend = segments[1].as_bend().unwrap();
        assert_relative_eq!(bend.turn, -PI / 2., max_relative = 1e-12);
        assert!(bend.orientation.reflect_vert());
        assert_abs_diff_eq!(bend.orientation.angle(), 90., epsilon = 1e-9);
        assert_abs_diff_eq!(bend.loc, Point::new(8., -2.), epsilon = 1e-9);
    }

    #[test]
    fn turns_across_the_branch_cut_are_normalized() {
        // Heading up-left, then down-left: a left turn of π/2 whose raw
        // atan2 difference is -3π/2.
        let segments = route(
            &[
                Point::zero(),
                Point::new(-10., 10.),
                Point::new(-20., 0.),
            ],
            2.,
        )
        .unwrap();
        let bend = segments[1].as_bend().unwrap();
        assert_relative_eq!(bend.turn, PI / 2., max_relative = 1e-12);
        assert!(!bend.orientation.reflect_vert());
    }

    #[test]
    fn short_paths_need_fewer_waypoints_than_radius() {
        let err = route(
            &[Point::zero(), Point::new(3., 0.), Point::new(3., 10.)],
            5.,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InfeasibleBendRadius { vertex: 1, .. }
        ));
    }

    #[test]
    fn outgoing_leg_too_short_for_the_fillet() {
        let err = route(
            &[Point::zero(), Point::new(10., 0.), Point::new(10., 3.)],
            5.,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InfeasibleBendRadius { vertex: 1, .. }
        ));
    }

    #[test]
    fn consecutive_corners_share_leg_length() {
        // Middle leg of length 10 with two right-angle fillets of ru = 6:
        // the second corner's incoming leg has only 4 left.
        let err = route(
            &[
                Point::zero(),
                Point::new(20., 0.),
                Point::new(20., 10.),
                Point::new(40., 10.),
            ],
            6.,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InfeasibleBendRadius { vertex: 2, .. }
        ));
    }

    #[test]
    fn degenerate_paths_are_rejected() {
        assert_eq!(
            route(&[Point::zero()], 2.).unwrap_err(),
            Error::DegeneratePath {
                reason: "fewer than two waypoints"
            }
        );
        assert_eq!(
            route(&[Point::zero(), Point::zero(), Point::new(10., 0.)], 2.).unwrap_err(),
            Error::DegeneratePath {
                reason: "coincident consecutive waypoints"
            }
        );
    }

    #[test]
    fn collinear_and_antiparallel_corners_are_undefined() {
        let err = route(
            &[Point::zero(), Point::new(5., 0.), Point::new(10., 0.)],
            2.,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::UndefinedCornerGeometry { vertex: 1, .. }
        ));

        let err = route(
            &[Point::zero(), Point::new(5., 0.), Point::new(0., 0.)],
            2.,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::UndefinedCornerGeometry { vertex: 1, .. }
        ));
    }

    #[test]
    fn non_positive_radius_is_invalid() {
        let err = route(&[Point::zero(), Point::new(1., 0.)], 0.).unwrap_err();
        assert_eq!(err, Error::InvalidDimension { name: "ru", value: 0. });
    }
}
