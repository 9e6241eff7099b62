//! Utilities and types for orienting layout objects.

use serde::{Deserialize, Serialize};

/// An orientation of a geometric object.
///
/// Captures reflection and rotation, but not position or scaling.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Orientation {
    /// Reflect vertically (ie. about the x-axis).
    ///
    /// Applied before rotation.
    pub(crate) reflect_vert: bool,
    /// Counter-clockwise angle in degrees.
    ///
    /// Applied after reflecting vertically.
    pub(crate) angle: f64,
}

impl Orientation {
    /// Creates a new orientation with the given reflection and angle settings.
    ///
    /// The angle is wrapped to the interval `[0, 360)` degrees.
    pub fn from_reflect_and_angle(reflect_vert: bool, angle: f64) -> Self {
        Self {
            reflect_vert,
            angle: crate::wrap_angle(angle),
        }
    }

    /// Creates a pure rotation by `angle` degrees counter-clockwise.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::from_reflect_and_angle(false, angle)
    }

    /// Returns the identity orientation with `reflect_vert = false` and `angle = 0.`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns whether the orientation is reflected vertically.
    #[inline]
    pub fn reflect_vert(&self) -> bool {
        self.reflect_vert
    }

    /// Returns the angle associated with this orientation, in degrees.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angles_wrap_to_a_single_turn() {
        assert_eq!(Orientation::from_angle(370.).angle(), 10.);
        assert_eq!(Orientation::from_angle(-90.).angle(), 270.);
        assert_eq!(Orientation::from_reflect_and_angle(true, 360.).angle(), 0.);
    }
}
