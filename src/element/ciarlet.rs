//! Finite element definitions

use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::traits::{ElementFamily, FiniteElement};
use crate::types::{Continuity, MapType, RealScalar, ReferenceCellType};
use rlst::{DynamicArray, RandomAccessByRef, RandomAccessMut, Shape};
use std::fmt;

pub mod lagrange;
pub mod raviart_thomas;
pub use lagrange::LagrangeElementFamily;
pub use raviart_thomas::RaviartThomasElementFamily;

type EntityDofs = [Vec<Vec<usize>>; 4];

/// An element family
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Family {
    /// Lagrange
    Lagrange = 0,
    /// Raviart-Thomas
    RaviartThomas = 1,
}

impl Family {
    /// The name of the family
    pub fn name(&self) -> &'static str {
        match self {
            Family::Lagrange => "Lagrange",
            Family::RaviartThomas => "Raviart-Thomas",
        }
    }
}

/// The span of an element's basis functions
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Basis {
    /// Lagrange basis functions, one per equispaced node given in lattice coordinates
    Lagrange { lattice: Vec<Vec<usize>> },
    /// Lowest order Raviart-Thomas basis on a triangle
    RaviartThomas,
}

/// A Ciarlet element
///
/// The element is defined by a polynomial space and a set of functionals (point
/// evaluations here), each associated with a sub-entity of the reference cell.
pub struct CiarletElement<T: RealScalar> {
    family: Family,
    cell_type: ReferenceCellType,
    degree: usize,
    embedded_superdegree: usize,
    map_type: MapType,
    value_shape: Vec<usize>,
    value_size: usize,
    continuity: Continuity,
    dim: usize,
    basis: Basis,
    interpolation_points: DynamicArray<T, 2>,
    entity_dofs: EntityDofs,
    entity_closure_dofs: EntityDofs,
}

impl<T: RealScalar> fmt::Debug for CiarletElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CiarletElement")
            .field("family", &self.family)
            .field("cell_type", &self.cell_type)
            .field("degree", &self.degree)
            .field("continuity", &self.continuity)
            .field("dim", &self.dim)
            .field("entity_dofs", &self.entity_dofs)
            .finish_non_exhaustive()
    }
}

impl<T: RealScalar> CiarletElement<T> {
    /// Create a Ciarlet element
    ///
    /// `entity_dof_counts[d][e]` is the number of DOFs associated with sub-entity `e` of dimension `d`.
    /// DOFs are numbered by dimension, then by entity, so the rows of `interpolation_points` must be in that order.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn create(
        family: Family,
        cell_type: ReferenceCellType,
        degree: usize,
        value_shape: Vec<usize>,
        basis: Basis,
        interpolation_points: DynamicArray<T, 2>,
        entity_dof_counts: [Vec<usize>; 4],
        map_type: MapType,
        continuity: Continuity,
        embedded_superdegree: usize,
    ) -> Result<Self> {
        let tdim = reference_cell::dim(cell_type);
        let dim = entity_dof_counts.iter().flatten().sum::<usize>();
        if interpolation_points.shape() != [dim, tdim] {
            return Err(Error::ShapeMismatch {
                expected: vec![dim, tdim],
                actual: interpolation_points.shape().to_vec(),
            });
        }
        let value_size = value_shape.iter().product();

        let mut entity_dofs: EntityDofs = [vec![], vec![], vec![], vec![]];
        let mut dof = 0;
        for (d, counts) in entity_dof_counts.iter().enumerate() {
            for n in counts {
                entity_dofs[d].push((dof..dof + n).collect::<Vec<_>>());
                dof += n;
            }
        }
        if continuity == Continuity::Discontinuous {
            for edofs in entity_dofs.iter_mut().take(tdim) {
                for e in edofs.iter_mut() {
                    e.clear();
                }
            }
            entity_dofs[tdim] = vec![(0..dim).collect()];
        }

        let connectivity = reference_cell::connectivity(cell_type);
        let mut entity_closure_dofs: EntityDofs = [vec![], vec![], vec![], vec![]];
        for (d, conn_d) in connectivity.iter().enumerate() {
            for conn in conn_d {
                let mut closure = vec![];
                for (c, sub_entities) in conn.iter().enumerate().take(d + 1) {
                    for e in sub_entities {
                        closure.extend_from_slice(&entity_dofs[c][*e]);
                    }
                }
                closure.sort_unstable();
                entity_closure_dofs[d].push(closure);
            }
        }

        Ok(Self {
            family,
            cell_type,
            degree,
            embedded_superdegree,
            map_type,
            value_shape,
            value_size,
            continuity,
            dim,
            basis,
            interpolation_points,
            entity_dofs,
            entity_closure_dofs,
        })
    }

    /// The family of this element
    pub fn family(&self) -> Family {
        self.family
    }

    /// The points at which the DOF functionals evaluate, one row per DOF
    pub fn interpolation_points(&self) -> &DynamicArray<T, 2> {
        &self.interpolation_points
    }
}

impl<T: RealScalar> FiniteElement for CiarletElement<T> {
    type T = T;
    fn value_shape(&self) -> &[usize] {
        &self.value_shape
    }
    fn value_size(&self) -> usize {
        self.value_size
    }
    fn map_type(&self) -> MapType {
        self.map_type
    }
    fn cell_type(&self) -> ReferenceCellType {
        self.cell_type
    }
    fn degree(&self) -> usize {
        self.degree
    }
    fn embedded_superdegree(&self) -> usize {
        self.embedded_superdegree
    }
    fn continuity(&self) -> Continuity {
        self.continuity
    }
    fn dim(&self) -> usize {
        self.dim
    }
    fn tabulate<Array2: RandomAccessByRef<2, Item = T> + Shape<2>>(
        &self,
        points: &Array2,
        nderivs: usize,
        data: &mut (impl RandomAccessMut<4, Item = T> + Shape<4>),
    ) -> Result<()> {
        if nderivs > 1 {
            return Err(Error::UnsupportedDerivatives {
                requested: nderivs,
                supported: 1,
            });
        }
        let tdim = reference_cell::dim(self.cell_type);
        let npoints = points.shape()[0];
        if points.shape()[1] != tdim {
            return Err(Error::ShapeMismatch {
                expected: vec![npoints, tdim],
                actual: points.shape().to_vec(),
            });
        }
        let expected = self.tabulate_array_shape(nderivs, npoints);
        if data.shape() != expected {
            return Err(Error::ShapeMismatch {
                expected: expected.to_vec(),
                actual: data.shape().to_vec(),
            });
        }
        match &self.basis {
            Basis::Lagrange { lattice } => {
                lagrange::tabulate(self.cell_type, self.degree, lattice, points, nderivs, data)
            }
            Basis::RaviartThomas => raviart_thomas::tabulate(points, nderivs, data),
        }
        Ok(())
    }
    fn entity_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]> {
        self.entity_dofs
            .get(entity_dim)
            .and_then(|e| e.get(entity_number))
            .map(|d| d.as_slice())
    }
    fn entity_closure_dofs(&self, entity_dim: usize, entity_number: usize) -> Option<&[usize]> {
        self.entity_closure_dofs
            .get(entity_dim)
            .and_then(|e| e.get(entity_number))
            .map(|d| d.as_slice())
    }
}

/// A family of Ciarlet elements created from a [Family] tag
#[derive(Debug, Clone, PartialEq)]
pub enum CiarletFamily<T: RealScalar> {
    /// Lagrange family
    Lagrange(LagrangeElementFamily<T>),
    /// Raviart-Thomas family
    RaviartThomas(RaviartThomasElementFamily<T>),
}

impl<T: RealScalar> ElementFamily for CiarletFamily<T> {
    type T = T;
    type FiniteElement = CiarletElement<T>;
    fn element(&self, cell_type: ReferenceCellType) -> Result<CiarletElement<T>> {
        match self {
            CiarletFamily::Lagrange(f) => f.element(cell_type),
            CiarletFamily::RaviartThomas(f) => f.element(cell_type),
        }
    }
}

/// Create an element family
///
/// Use [Continuity::default()] for the standard continuity of the family.
pub fn create_family<T: RealScalar>(
    family: Family,
    degree: usize,
    continuity: Continuity,
) -> Result<CiarletFamily<T>> {
    match family {
        Family::Lagrange => {
            if degree == 0 && continuity == Continuity::Continuous {
                return Err(Error::ContinuousDegreeZero {
                    family: family.name(),
                });
            }
            Ok(CiarletFamily::Lagrange(LagrangeElementFamily::new(
                degree, continuity,
            )))
        }
        Family::RaviartThomas => {
            if degree != 1 {
                return Err(Error::UnsupportedDegree {
                    family: family.name(),
                    degree,
                });
            }
            Ok(CiarletFamily::RaviartThomas(
                RaviartThomasElementFamily::new(degree, continuity),
            ))
        }
    }
}
