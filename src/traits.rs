//! Trait definitions

mod element;
mod function;
mod grid;
mod io;

pub use element::{ElementFamily, FiniteElement};
pub use function::FunctionSpace;
pub use grid::{Builder, Grid};
pub use io::GmshIO;
