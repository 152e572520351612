//! Errors

use crate::types::ReferenceCellType;

/// Errors raised while building grids, elements and function spaces
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A continuous element was requested with degree 0
    #[error("Cannot create a continuous degree 0 {family} element")]
    ContinuousDegreeZero {
        /// Element family name
        family: &'static str,
    },
    /// The element family is not defined on this cell
    #[error("{family} elements are not implemented on {cell:?} cells")]
    UnsupportedCell {
        /// Element family name
        family: &'static str,
        /// Requested cell type
        cell: ReferenceCellType,
    },
    /// The element family is not defined for this degree
    #[error("{family} elements of degree {degree} are not implemented")]
    UnsupportedDegree {
        /// Element family name
        family: &'static str,
        /// Requested degree
        degree: usize,
    },
    /// Too many derivatives were requested from a tabulation
    #[error("Tabulation of {requested} derivatives requested, at most {supported} supported")]
    UnsupportedDerivatives {
        /// Number of derivatives requested
        requested: usize,
        /// Largest supported number of derivatives
        supported: usize,
    },
    /// An id was added to a builder twice
    #[error("{kind} with id {id} was added more than once")]
    DuplicateId {
        /// "point" or "cell"
        kind: &'static str,
        /// The repeated id
        id: usize,
    },
    /// A cell refers to a point that was never added
    #[error("Cell {cell} uses point {point}, which has not been added")]
    UnknownPoint {
        /// Id of the cell
        cell: usize,
        /// Id of the missing point
        point: usize,
    },
    /// An array did not have the expected shape
    #[error("Expected array of shape {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        actual: Vec<usize>,
    },
    /// A grid with no cells was requested
    #[error("Cannot create a grid with no cells")]
    EmptyGrid,
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
