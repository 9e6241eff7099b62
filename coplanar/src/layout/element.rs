//! Basic layout elements.
//!
//! Generated layouts consist of cells, instances, geometric shapes, and text
//! annotations.

use std::sync::Arc;

use arcstr::ArcStr;
use geometry::orientation::Orientation;
use geometry::point::Point;
use geometry::polygon::Polygon;
use geometry::transform::{Transform, Transformation};

use crate::layers::Layer;

/// A raw layout cell.
#[derive(Debug, Clone, Default)]
pub struct RawCell {
    pub(crate) name: ArcStr,
    pub(crate) elements: Vec<Element>,
}

impl RawCell {
    pub(crate) fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Returns the name of this cell.
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// Returns the elements of this cell, in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn add_element(&mut self, elem: impl Into<Element>) {
        self.elements.push(elem.into());
    }

    /// Resolves all instances recursively, returning the cell's shapes and
    /// text annotations transformed into this cell's coordinate system.
    pub fn flatten(&self) -> Vec<Element> {
        let mut out = Vec::new();
        self.flatten_into(Transformation::identity(), &mut out);
        out
    }

    fn flatten_into(&self, trans: Transformation, out: &mut Vec<Element>) {
        for element in &self.elements {
            match element {
                Element::Shape(shape) => out.push(Element::Shape(Shape {
                    layer: shape.layer,
                    polygon: shape.polygon.clone().transform(trans),
                })),
                Element::Text(text) => out.push(Element::Text(Text {
                    layer: text.layer,
                    text: text.text.clone(),
                    loc: trans.apply(text.loc),
                })),
                Element::Instance(inst) => {
                    let child = Transformation::cascade(trans, inst.transformation());
                    inst.cell.flatten_into(child, out);
                }
            }
        }
    }
}

/// A raw layout instance.
///
/// Consists of a pointer to an underlying cell and its instantiated location
/// and orientation.
#[derive(Debug, Clone)]
pub struct RawInstance {
    pub(crate) cell: Arc<RawCell>,
    pub(crate) loc: Point,
    pub(crate) orientation: Orientation,
}

impl RawInstance {
    /// Creates a new raw instance of the given cell.
    pub fn new(cell: impl Into<Arc<RawCell>>, loc: Point, orientation: Orientation) -> Self {
        Self {
            cell: cell.into(),
            loc,
            orientation,
        }
    }

    /// Returns the cell instantiated by this instance.
    pub fn cell(&self) -> &Arc<RawCell> {
        &self.cell
    }

    /// Returns the current transformation of `self`.
    pub fn transformation(&self) -> Transformation {
        Transformation::from_offset_and_orientation(self.loc, self.orientation)
    }
}

/// A primitive layout shape consisting of a layer and a polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    layer: Layer,
    polygon: Polygon,
}

impl Shape {
    /// Creates a new layout shape.
    pub fn new(layer: Layer, polygon: Polygon) -> Self {
        Self { layer, polygon }
    }

    /// Returns the layer that this shape is on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Returns the polygon of this layout shape.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

/// A primitive text annotation consisting of a layer, string, and location.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    layer: Layer,
    text: ArcStr,
    loc: Point,
}

impl Text {
    /// Creates a new layout text annotation.
    pub fn new(layer: Layer, text: impl Into<ArcStr>, loc: Point) -> Self {
        Self {
            layer,
            text: text.into(),
            loc,
        }
    }

    /// Gets the layer that this annotation is on.
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Gets the text of this annotation.
    pub fn text(&self) -> &ArcStr {
        &self.text
    }

    /// Gets the location of this annotation.
    pub fn loc(&self) -> Point {
        self.loc
    }
}

/// A primitive layout element.
#[derive(Debug, Clone)]
pub enum Element {
    /// A raw layout instance.
    Instance(RawInstance),
    /// A primitive layout shape.
    Shape(Shape),
    /// A primitive text annotation.
    Text(Text),
}

impl Element {
    /// Returns the contained shape, if this element is one.
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Element::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    /// Returns the contained text annotation, if this element is one.
    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Element::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<RawInstance> for Element {
    fn from(value: RawInstance) -> Self {
        Self::Instance(value)
    }
}

impl From<Shape> for Element {
    fn from(value: Shape) -> Self {
        Self::Shape(value)
    }
}

impl From<Text> for Element {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}
