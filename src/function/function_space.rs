//! Function spaces

mod common;
mod serial;

pub use serial::SerialFunctionSpace;

use crate::element::ciarlet::CiarletElement;
use crate::error::Result;
use crate::traits::{ElementFamily, Grid};
use crate::types::RealScalar;

/// Create a function space on a grid
pub fn function_space<'a, T: RealScalar, GridImpl: Grid<T = T>>(
    grid: &'a GridImpl,
    e_family: &impl ElementFamily<T = T, FiniteElement = CiarletElement<T>>,
) -> Result<SerialFunctionSpace<'a, T, GridImpl>> {
    SerialFunctionSpace::new(grid, e_family)
}
