//! A block that can be instantiated as a layout cell.

use std::any::Any;

use arcstr::ArcStr;

/// A parameterized block that can be instantiated as a layout cell.
pub trait Block: Any + Send + Sync {
    /// A crate-wide unique identifier for this block.
    fn id() -> ArcStr
    where
        Self: Sized;

    /// A name for a specific parametrization of this block.
    ///
    /// Instances of the block are initially assigned this name; it also
    /// serves as the display text a host shows for the cell.
    fn name(&self) -> ArcStr {
        arcstr::literal!("unnamed")
    }
}
