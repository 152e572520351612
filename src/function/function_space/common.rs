//! DOF numbering shared by function spaces

use crate::element::ciarlet::CiarletElement;
use crate::element::reference_cell;
use crate::error::Result;
use crate::traits::{ElementFamily, FiniteElement, Grid};
use crate::types::{RealScalar, ReferenceCellType};
use std::collections::HashMap;

pub(crate) type DofList = Vec<Vec<usize>>;

/// The result of numbering the DOFs of a space
pub(crate) struct DofMap<T: RealScalar> {
    pub(crate) elements: HashMap<ReferenceCellType, CiarletElement<T>>,
    pub(crate) cell_dofs: DofList,
    pub(crate) entity_dofs: [DofList; 4],
    pub(crate) size: usize,
}

/// Number the DOFs of a space
///
/// Cells are visited in order. The first time a cell meets a sub-entity that carries DOFs,
/// new DOF numbers are allocated for that entity; later cells reuse them.
///
/// The DOFs on an edge interior are ordered from the edge's lower numbered vertex to its
/// higher numbered vertex, so neighbouring cells agree on the position of each shared DOF.
pub(crate) fn assign_dofs<T: RealScalar, GridImpl: Grid<T = T>>(
    grid: &GridImpl,
    e_family: &impl ElementFamily<T = T, FiniteElement = CiarletElement<T>>,
) -> Result<DofMap<T>> {
    let mut size = 0;
    let mut entity_dofs: [DofList; 4] = [vec![], vec![], vec![], vec![]];
    let tdim = grid.topology_dim();

    let mut elements = HashMap::new();
    for cell in grid.entity_types(tdim) {
        elements.insert(*cell, e_family.element(*cell)?);
    }

    for (d, dofs) in entity_dofs.iter_mut().enumerate().take(tdim + 1) {
        *dofs = vec![vec![]; grid.entity_count_by_dim(d)];
    }
    let mut cell_dofs = vec![vec![]; grid.cell_count()];

    for (cell, dofs) in cell_dofs.iter_mut().enumerate() {
        let Some(cell_type) = grid.cell_type(cell) else {
            continue;
        };
        let Some(element) = elements.get(&cell_type) else {
            continue;
        };
        let ref_edges = reference_cell::edges(cell_type);
        let vertices = grid.cell_to_entities(cell, 0).unwrap_or(&[]);
        *dofs = vec![0; element.dim()];
        for (d, entity_dofs_d) in entity_dofs.iter_mut().enumerate().take(tdim + 1) {
            let Some(entities) = grid.cell_to_entities(cell, d) else {
                continue;
            };
            for (i, e) in entities.iter().enumerate() {
                let e_dofs = element.entity_dofs(d, i).unwrap_or(&[]);
                if e_dofs.is_empty() {
                    continue;
                }
                if entity_dofs_d[*e].is_empty() {
                    entity_dofs_d[*e] = (size..size + e_dofs.len()).collect();
                    size += e_dofs.len();
                }
                let reversed = d == 1
                    && matches!(
                        (vertices.get(ref_edges[i][0]), vertices.get(ref_edges[i][1])),
                        (Some(v0), Some(v1)) if v0 > v1
                    );
                if reversed {
                    for (local_dof, dof) in e_dofs.iter().rev().zip(&entity_dofs_d[*e]) {
                        dofs[*local_dof] = *dof;
                    }
                } else {
                    for (local_dof, dof) in e_dofs.iter().zip(&entity_dofs_d[*e]) {
                        dofs[*local_dof] = *dof;
                    }
                }
            }
        }
    }

    Ok(DofMap {
        elements,
        cell_dofs,
        entity_dofs,
        size,
    })
}
