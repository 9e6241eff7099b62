//! The layout generator framework.

use std::sync::Arc;

use arcstr::ArcStr;
use geometry::orientation::Orientation;
use geometry::point::Point;
use tracing::{span, Level};

use crate::block::Block;
use crate::error::Result;
use crate::layout::element::{Element, RawCell, RawInstance};

pub mod element;

/// A block that has a layout.
pub trait HasLayout: Block {
    /// Extra data produced while generating the block's cell.
    ///
    /// Common uses include returning the segment descriptors a routed cell
    /// was decomposed into, for callers that need them after drawing.
    type Data: Send + Sync;

    /// Generates the block's layout.
    fn layout(&self, cell: &mut CellBuilder) -> Result<Self::Data>;
}

/// A generated layout cell, together with the data its generator returned.
#[derive(Debug, Clone)]
pub struct Cell<D> {
    raw: Arc<RawCell>,
    data: D,
}

impl<D> Cell<D> {
    /// Returns the raw cell.
    pub fn raw(&self) -> &Arc<RawCell> {
        &self.raw
    }

    /// Returns the generator's data.
    pub fn data(&self) -> &D {
        &self.data
    }
}

/// A builder for creating a layout cell.
pub struct CellBuilder {
    cell: RawCell,
}

impl CellBuilder {
    pub(crate) fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            cell: RawCell::new(name),
        }
    }

    /// Draws an element into this cell.
    pub fn draw(&mut self, element: impl Into<Element>) {
        self.cell.add_element(element);
    }

    /// Generates the cell for `block` and places an instance of it at `loc`
    /// with the given orientation.
    ///
    /// Returns the data produced by the sub-block's generator.
    pub fn instantiate<B: HasLayout>(
        &mut self,
        block: &B,
        loc: Point,
        orientation: Orientation,
    ) -> Result<B::Data> {
        let cell = generate(block)?;
        self.draw(RawInstance::new(cell.raw.clone(), loc, orientation));
        Ok(cell.data)
    }

    pub(crate) fn finish(self) -> RawCell {
        self.cell
    }
}

/// Generates the layout cell for `block`.
pub fn generate<B: HasLayout>(block: &B) -> Result<Cell<B::Data>> {
    let name = block.name();
    let span = span!(Level::DEBUG, "generating layout cell", cell = %name);
    let _guard = span.enter();

    let mut builder = CellBuilder::new(name);
    let data = block.layout(&mut builder)?;
    Ok(Cell {
        raw: Arc::new(builder.finish()),
        data,
    })
}
