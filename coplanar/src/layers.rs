//! Target layers for generated geometry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A target layer for generated shapes.
///
/// The host adapter maps these to its own layer numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// The etched gap between the center conductor and the ground plane.
    Gap,
    /// Oversized clearance geometry drawn around the conductive pattern for
    /// fabrication.
    Protection,
    /// Debug text annotations.
    Annotation,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Gap => write!(f, "gap"),
            Layer::Protection => write!(f, "protection"),
            Layer::Annotation => write!(f, "annotation"),
        }
    }
}
