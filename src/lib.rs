//! Function spaces on surface grids for boundary element methods
//!
//! The crate contains three layers:
//! - [grid]: flat triangle surface grids, including the [regular_sphere](grid::regular_sphere)
//! - [element]: reference cells and Ciarlet finite element families (Lagrange and Raviart-Thomas)
//! - [function]: function spaces that number the degrees of freedom of an element family on a grid
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod element;
pub mod error;
pub mod function;
pub mod grid;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
