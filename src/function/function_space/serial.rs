//! Serial function space

use crate::element::ciarlet::CiarletElement;
use crate::element::reference_cell;
use crate::error::Result;
use crate::function::function_space::common::assign_dofs;
use crate::traits::{ElementFamily, FiniteElement, FunctionSpace, Grid};
use crate::types::{Ownership, RealScalar, ReferenceCellType};
use log::debug;
use std::collections::HashMap;

/// A serial function space
///
/// Every DOF is owned by the local process, so local and global DOF numbers coincide.
#[derive(Debug)]
pub struct SerialFunctionSpace<'a, T: RealScalar, GridImpl: Grid<T = T>> {
    grid: &'a GridImpl,
    elements: HashMap<ReferenceCellType, CiarletElement<T>>,
    entity_dofs: [Vec<Vec<usize>>; 4],
    cell_dofs: Vec<Vec<usize>>,
    size: usize,
}

impl<'a, T: RealScalar, GridImpl: Grid<T = T>> SerialFunctionSpace<'a, T, GridImpl> {
    /// Create new function space
    pub fn new(
        grid: &'a GridImpl,
        e_family: &impl ElementFamily<T = T, FiniteElement = CiarletElement<T>>,
    ) -> Result<Self> {
        let dofmap = assign_dofs(grid, e_family)?;
        debug!(
            "Created function space with {} DOFs on a grid with {} cells",
            dofmap.size,
            grid.cell_count()
        );

        Ok(Self {
            grid,
            elements: dofmap.elements,
            entity_dofs: dofmap.entity_dofs,
            cell_dofs: dofmap.cell_dofs,
            size: dofmap.size,
        })
    }

    /// The lowest entity dimension that carries DOFs
    fn lowest_dof_dim(&self) -> usize {
        let tdim = self.grid.topology_dim();
        (0..tdim)
            .find(|d| {
                self.elements.values().any(|e| {
                    (0..reference_cell::entity_counts(e.cell_type())[*d])
                        .any(|i| e.entity_dofs(*d, i).is_some_and(|dofs| !dofs.is_empty()))
                })
            })
            .unwrap_or(tdim)
    }
}

impl<T: RealScalar, GridImpl: Grid<T = T>> FunctionSpace
    for SerialFunctionSpace<'_, T, GridImpl>
{
    type Grid = GridImpl;
    type FiniteElement = CiarletElement<T>;

    fn grid(&self) -> &Self::Grid {
        self.grid
    }
    fn element(&self, cell_type: ReferenceCellType) -> Option<&CiarletElement<T>> {
        self.elements.get(&cell_type)
    }
    fn get_local_dof_numbers(&self, entity_dim: usize, entity_number: usize) -> &[usize] {
        &self.entity_dofs[entity_dim][entity_number]
    }
    fn local_size(&self) -> usize {
        self.size
    }
    fn global_size(&self) -> usize {
        self.size
    }
    fn cell_dofs(&self, cell: usize) -> Option<&[usize]> {
        self.cell_dofs.get(cell).map(|d| d.as_slice())
    }
    fn cell_colouring(&self) -> HashMap<ReferenceCellType, Vec<Vec<usize>>> {
        let tdim = self.grid.topology_dim();
        let cell_types = self.grid.entity_types(tdim);
        let mut colouring = cell_types
            .iter()
            .map(|t| (*t, vec![]))
            .collect::<HashMap<_, Vec<Vec<usize>>>>();

        let edim = self.lowest_dof_dim();
        let mut entity_colours = vec![vec![]; self.grid.entity_count_by_dim(edim)];

        for cell in 0..self.grid.cell_count() {
            let (Some(cell_type), Some(indices)) =
                (self.grid.cell_type(cell), self.grid.cell_to_entities(cell, edim))
            else {
                continue;
            };
            let ncolours = colouring[&cell_type].len();
            let c = (0..ncolours)
                .find(|c| {
                    indices
                        .iter()
                        .all(|v| !entity_colours[*v].contains(c))
                })
                .unwrap_or(ncolours);
            if c == ncolours {
                for (ct, colours) in colouring.iter_mut() {
                    colours.push(if *ct == cell_type { vec![cell] } else { vec![] });
                }
            } else if let Some(colours) = colouring.get_mut(&cell_type) {
                colours[c].push(cell);
            }
            for v in indices {
                entity_colours[*v].push(c);
            }
        }
        colouring
    }
    fn global_dof_index(&self, local_dof_index: usize) -> usize {
        local_dof_index
    }
    fn ownership(&self, _local_dof_index: usize) -> Ownership {
        Ownership::Owned
    }
}
