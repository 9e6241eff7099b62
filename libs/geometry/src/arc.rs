//! Circular arc sampling.

use std::f64::consts::{PI, TAU};

use crate::point::Point;
use crate::wrap_angle_rad;

/// Angular tolerance below which two angles are considered equal.
pub const ANGLE_TOL: f64 = 1e-9;

/// Samples a circular arc of the given radius, centered at the origin.
///
/// The arc starts at angle `start` and ends at angle `stop` (radians,
/// unrestricted range), walking through the angularly *shorter* of the two
/// directions between them (mod 2π) in equal steps of `2π / n`. A final point
/// is forced exactly at `stop` if the stepped walk does not land there within
/// [`ANGLE_TOL`]. An angular difference of exactly π walks counter-clockwise.
///
/// If `start` and `stop` coincide mod 2π, the arc has zero length and a
/// single point at angle `start` is returned; the walk is never interpreted
/// as a full circle.
///
/// The caller must provide `radius > 0` and `n >= 1`; `n` sets the angular
/// sample density, not the point count. The returned sequence has
/// `n_steps + 1` or `n_steps + 2` points, where
/// `n_steps = floor(sweep / (2π/n))`.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// use std::f64::consts::PI;
///
/// let pts = geometry::arc::arc(2.0, 0.0, PI, 2);
/// assert_eq!(pts.len(), 2);
/// assert_eq!(pts[0], Point::new(2.0, 0.0));
/// ```
pub fn arc(radius: f64, start: f64, stop: f64, n: usize) -> Vec<Point> {
    debug_assert!(radius > 0.);
    debug_assert!(n >= 1);

    let alpha_rel = wrap_angle_rad(stop - start);
    if alpha_rel <= ANGLE_TOL || alpha_rel >= TAU - ANGLE_TOL {
        return vec![Point::from_angle(start) * radius];
    }

    // Walk the shorter way around: forward if the relative angle is at most
    // π, otherwise backward through the complement.
    let (step, sweep) = if alpha_rel > PI {
        (-TAU / n as f64, TAU - alpha_rel)
    } else {
        (TAU / n as f64, alpha_rel)
    };
    let n_steps = (sweep / step.abs()).floor() as usize;

    let mut pts = Vec::with_capacity(n_steps + 2);
    let mut alpha = start;
    for _ in 0..=n_steps {
        pts.push(Point::from_angle(alpha) * radius);
        alpha += step;
    }

    let walked = n_steps as f64 * step.abs();
    if (sweep - walked).abs() > ANGLE_TOL {
        pts.push(Point::from_angle(stop) * radius);
    }
    pts
}
