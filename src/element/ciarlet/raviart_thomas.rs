//! Raviart-Thomas elements

use crate::element::ciarlet::{Basis, CiarletElement, Family};
use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::traits::ElementFamily;
use crate::types::{Continuity, MapType, RealScalar, ReferenceCellType};
use rlst::{rlst_dynamic_array2, RandomAccessByRef, RandomAccessMut, Shape};
use std::marker::PhantomData;

/// Create a Raviart-Thomas element
pub fn create<T: RealScalar>(
    cell_type: ReferenceCellType,
    degree: usize,
    continuity: Continuity,
) -> Result<CiarletElement<T>> {
    if cell_type != ReferenceCellType::Triangle {
        return Err(Error::UnsupportedCell {
            family: Family::RaviartThomas.name(),
            cell: cell_type,
        });
    }
    if degree != 1 {
        return Err(Error::UnsupportedDegree {
            family: Family::RaviartThomas.name(),
            degree,
        });
    }

    // One normal moment per edge, located at the edge midpoint
    let vertices = reference_cell::vertices::<T>(cell_type);
    let edges = reference_cell::edges(cell_type);
    let half = T::from(0.5).unwrap();
    let mut interpolation_points = rlst_dynamic_array2!(T, [edges.len(), 2]);
    for (e, edge) in edges.iter().enumerate() {
        for j in 0..2 {
            *interpolation_points.get_mut([e, j]).unwrap() =
                half * (vertices[edge[0]][j] + vertices[edge[1]][j]);
        }
    }

    CiarletElement::create(
        Family::RaviartThomas,
        cell_type,
        degree,
        vec![2],
        Basis::RaviartThomas,
        interpolation_points,
        [vec![0; 3], vec![1; 3], vec![0], vec![]],
        MapType::ContravariantPiola,
        continuity,
        degree,
    )
}

/// Tabulate the lowest order Raviart-Thomas basis on the reference triangle
pub(crate) fn tabulate<T: RealScalar>(
    points: &(impl RandomAccessByRef<2, Item = T> + Shape<2>),
    nderivs: usize,
    data: &mut impl RandomAccessMut<4, Item = T>,
) {
    let one = T::one();
    let zero = T::zero();
    for p in 0..points.shape()[0] {
        let x = *points.get([p, 0]).unwrap();
        let y = *points.get([p, 1]).unwrap();
        let values = [[-x, -y], [x - one, y], [-x, one - y]];
        let signs = [-one, one, -one];
        for (b, value) in values.iter().enumerate() {
            for (c, v) in value.iter().enumerate() {
                *data.get_mut([0, p, b, c]).unwrap() = *v;
            }
            if nderivs > 0 {
                *data.get_mut([1, p, b, 0]).unwrap() = signs[b];
                *data.get_mut([1, p, b, 1]).unwrap() = zero;
                *data.get_mut([2, p, b, 0]).unwrap() = zero;
                *data.get_mut([2, p, b, 1]).unwrap() = signs[b];
            }
        }
    }
}

/// Raviart-Thomas element family
#[derive(Debug, Clone, PartialEq)]
pub struct RaviartThomasElementFamily<T: RealScalar> {
    degree: usize,
    continuity: Continuity,
    _t: PhantomData<T>,
}

impl<T: RealScalar> RaviartThomasElementFamily<T> {
    /// Create new family
    pub fn new(degree: usize, continuity: Continuity) -> Self {
        Self {
            degree,
            continuity,
            _t: PhantomData,
        }
    }
}

impl<T: RealScalar> ElementFamily for RaviartThomasElementFamily<T> {
    type T = T;
    type FiniteElement = CiarletElement<T>;
    fn element(&self, cell_type: ReferenceCellType) -> Result<CiarletElement<T>> {
        create::<T>(cell_type, self.degree, self.continuity)
    }
}
