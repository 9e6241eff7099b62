//! Parameterized-cell generators for coplanar-waveguide chip geometry.
//!
//! Each generator is a plain parameter struct implementing
//! [`HasLayout`](layout::HasLayout): a pure function from its declared
//! parameters to a set of polygons tagged by target [`Layer`](layers::Layer).
//! A host layout tool's adapter is responsible for layer resolution,
//! database-unit scaling, and instancing; nothing in this crate touches the
//! host.
//!
//! # Examples
//!
//! Generate a waveguide with a single filleted corner:
//!
//! ```
//! use coplanar::layout::generate;
//! use coplanar::waveguide::Waveguide;
//! use geometry::prelude::*;
//!
//! let cell = generate(&Waveguide {
//!     path: vec![
//!         Point::new(0., 0.),
//!         Point::new(100., 0.),
//!         Point::new(100., 100.),
//!     ],
//!     ru: 50.,
//!     ..Default::default()
//! })?;
//! assert_eq!(cell.data().len(), 3);
//! # Ok::<(), coplanar::error::Error>(())
//! ```
#![warn(missing_docs)]

pub mod block;
pub mod error;
pub mod layers;
pub mod layout;
pub mod waveguide;
