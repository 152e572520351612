//! Type definitions

use num::Float;
use rlst::RlstScalar;
use std::fmt::{Debug, Display};
use std::iter::Sum;

/// A real scalar that can be used for coordinates and basis function values
pub trait RealScalar:
    Float + RlstScalar<Real = Self> + Debug + Display + Default + Sum + Send + Sync + 'static
{
}

impl<
        T: Float + RlstScalar<Real = T> + Debug + Display + Default + Sum + Send + Sync + 'static,
    > RealScalar for T
{
}

/// The type of a reference cell
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ReferenceCellType {
    /// A point
    Point = 0,
    /// A line interval
    Interval = 1,
    /// A triangle
    Triangle = 2,
    /// A quadrilateral
    Quadrilateral = 3,
    /// A tetrahedron (whose faces are all triangles)
    Tetrahedron = 4,
    /// A hexahedron (whose faces are all quadrilaterals)
    Hexahedron = 5,
    /// A triangular prism
    Prism = 6,
    /// A square-based pyramid
    Pyramid = 7,
}

impl ReferenceCellType {
    /// Create a reference cell type from a u8
    pub fn from(i: u8) -> Option<ReferenceCellType> {
        match i {
            0 => Some(ReferenceCellType::Point),
            1 => Some(ReferenceCellType::Interval),
            2 => Some(ReferenceCellType::Triangle),
            3 => Some(ReferenceCellType::Quadrilateral),
            4 => Some(ReferenceCellType::Tetrahedron),
            5 => Some(ReferenceCellType::Hexahedron),
            6 => Some(ReferenceCellType::Prism),
            7 => Some(ReferenceCellType::Pyramid),
            _ => None,
        }
    }
}

/// Continuity of an element
///
/// Continuous elements share the DOFs associated with sub-entities between
/// neighbouring cells. Discontinuous elements associate every DOF with the cell
/// interior.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[repr(u8)]
pub enum Continuity {
    /// The element has the standard continuity for its family
    #[default]
    Continuous = 0,
    /// The element is discontinuous between cells
    Discontinuous = 1,
}

/// The map type used by an element
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum MapType {
    /// Identity map
    Identity = 0,
    /// Covariant Piola map
    CovariantPiola = 1,
    /// Contravariant Piola map
    ContravariantPiola = 2,
    /// L2 Piola map
    L2Piola = 3,
}

/// Ownership of an entity or DOF
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Ownership {
    /// Owned
    Owned,
    /// Ghost, given as (owning process, index on owning process)
    Ghost(usize, usize),
}

/// A (cell, local index) pair
///
/// The local index is the index of a subentity (eg vertex, edge) within the cell as it is numbered in the reference cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLocalIndexPair {
    /// The cell's index
    pub cell: usize,
    /// The local index of the subentity
    pub local_index: usize,
}

impl CellLocalIndexPair {
    /// Create a (cell, local index) pair
    pub fn new(cell: usize, local_index: usize) -> Self {
        Self { cell, local_index }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reference_cell_type() {
        for cell in [
            ReferenceCellType::Point,
            ReferenceCellType::Interval,
            ReferenceCellType::Triangle,
            ReferenceCellType::Quadrilateral,
            ReferenceCellType::Tetrahedron,
            ReferenceCellType::Hexahedron,
            ReferenceCellType::Prism,
            ReferenceCellType::Pyramid,
        ] {
            assert_eq!(cell, ReferenceCellType::from(cell as u8).unwrap());
        }
        assert!(ReferenceCellType::from(8).is_none());
    }

    #[test]
    fn test_default_continuity() {
        assert_eq!(Continuity::default(), Continuity::Continuous);
    }
}
