//! A grid where every cell is a flat triangle
mod builder;
mod grid;
mod io;

pub use self::builder::FlatTriangleGridBuilder;
pub use self::grid::FlatTriangleGrid;
