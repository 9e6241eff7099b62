//! An import prelude that re-exports commonly used items.

pub use crate::arc::arc;
pub use crate::orientation::Orientation;
pub use crate::point::Point;
pub use crate::polygon::Polygon;
pub use crate::transform::{Transform, TransformMut, Transformation, Translate, TranslateMut};
