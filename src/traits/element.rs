//! Finite element definitions

use crate::element::reference_cell;
use crate::error::Result;
use crate::types::{Continuity, MapType, RealScalar, ReferenceCellType};
use rlst::{RandomAccessByRef, RandomAccessMut, Shape};

/// Compute the number of derivatives for a cell
fn compute_derivative_count(nderivs: usize, cell_type: ReferenceCellType) -> usize {
    match reference_cell::dim(cell_type) {
        0 => 1,
        1 => nderivs + 1,
        2 => (nderivs + 1) * (nderivs + 2) / 2,
        _ => (nderivs + 1) * (nderivs + 2) * (nderivs + 3) / 6,
    }
}

pub trait FiniteElement {
    //! A finite element defined on a reference cell
    /// The scalar type
    type T: RealScalar;

    /// The reference cell type
    fn cell_type(&self) -> ReferenceCellType;

    /// The polynomial degree
    fn degree(&self) -> usize;

    /// The lowest degree `n` such that the highest degree polynomial in this element is contained in a Lagrange (or vector Lagrange) element of degree `n`
    fn embedded_superdegree(&self) -> usize;

    /// The value shape
    fn value_shape(&self) -> &[usize];

    /// The value size
    fn value_size(&self) -> usize;

    /// The continuity of the element
    fn continuity(&self) -> Continuity;

    /// The number of basis functions
    fn dim(&self) -> usize;

    /// The push forward / pull back map to use for this element
    fn map_type(&self) -> MapType;

    /// Tabulate the values of the basis functions and their derivatives at a set of points
    ///
    /// `points` has shape `[npoints, tdim]`. `data` must have the shape given by
    /// [FiniteElement::tabulate_array_shape]; its indices are (derivative, point, basis function, value component).
    fn tabulate<Array2: RandomAccessByRef<2, Item = Self::T> + Shape<2>>(
        &self,
        points: &Array2,
        nderivs: usize,
        data: &mut (impl RandomAccessMut<4, Item = Self::T> + Shape<4>),
    ) -> Result<()>;

    /// The DOFs that are associated with a subentity of the reference cell
    fn entity_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]>;

    /// The DOFs that are associated with the closure of a subentity of the reference cell
    fn entity_closure_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]>;

    /// Get the required shape for a tabulation array
    fn tabulate_array_shape(&self, nderivs: usize, npoints: usize) -> [usize; 4] {
        [
            compute_derivative_count(nderivs, self.cell_type()),
            npoints,
            self.dim(),
            self.value_size(),
        ]
    }
}

pub trait ElementFamily {
    //! A family of finite elements
    /// The scalar type
    type T: RealScalar;
    /// The finite element type
    type FiniteElement: FiniteElement<T = Self::T>;

    /// Get the element of this family defined on the given cell type
    fn element(&self, cell_type: ReferenceCellType) -> Result<Self::FiniteElement>;
}
