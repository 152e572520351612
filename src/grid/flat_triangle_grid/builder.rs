//! Grid builder

use crate::error::{Error, Result};
use crate::grid::flat_triangle_grid::grid::FlatTriangleGrid;
use crate::traits::Builder;
use crate::types::RealScalar;
use log::debug;
use std::collections::{hash_map::Entry, HashMap};

/// Grid builder for a flat triangle grid
#[derive(Debug)]
pub struct FlatTriangleGridBuilder<T: RealScalar> {
    points: Vec<[T; 3]>,
    cells: Vec<[usize; 3]>,
    point_indices_to_ids: Vec<usize>,
    point_ids_to_indices: HashMap<usize, usize>,
    cell_indices_to_ids: Vec<usize>,
    cell_ids_to_indices: HashMap<usize, usize>,
}

fn insert_id(
    map: &mut HashMap<usize, usize>,
    id: usize,
    index: usize,
    kind: &'static str,
) -> Result<()> {
    match map.entry(id) {
        Entry::Occupied(_) => Err(Error::DuplicateId { kind, id }),
        Entry::Vacant(e) => {
            e.insert(index);
            Ok(())
        }
    }
}

impl<T: RealScalar> Builder<3> for FlatTriangleGridBuilder<T> {
    type Grid = FlatTriangleGrid<T>;
    type T = T;
    type CellData = [usize; 3];
    type GridMetadata = ();

    fn new(_data: ()) -> Self {
        Self {
            points: vec![],
            cells: vec![],
            point_indices_to_ids: vec![],
            point_ids_to_indices: HashMap::new(),
            cell_indices_to_ids: vec![],
            cell_ids_to_indices: HashMap::new(),
        }
    }

    fn new_with_capacity(npoints: usize, ncells: usize, _data: ()) -> Self {
        Self {
            points: Vec::with_capacity(npoints),
            cells: Vec::with_capacity(ncells),
            point_indices_to_ids: Vec::with_capacity(npoints),
            point_ids_to_indices: HashMap::with_capacity(npoints),
            cell_indices_to_ids: Vec::with_capacity(ncells),
            cell_ids_to_indices: HashMap::with_capacity(ncells),
        }
    }

    fn add_point(&mut self, id: usize, data: [T; 3]) -> Result<()> {
        insert_id(
            &mut self.point_ids_to_indices,
            id,
            self.point_indices_to_ids.len(),
            "point",
        )?;
        self.point_indices_to_ids.push(id);
        self.points.push(data);
        Ok(())
    }

    fn add_cell(&mut self, id: usize, cell_data: [usize; 3]) -> Result<()> {
        let mut cell = [0; 3];
        for (c, point) in cell.iter_mut().zip(&cell_data) {
            *c = *self
                .point_ids_to_indices
                .get(point)
                .ok_or(Error::UnknownPoint { cell: id, point: *point })?;
        }
        insert_id(
            &mut self.cell_ids_to_indices,
            id,
            self.cell_indices_to_ids.len(),
            "cell",
        )?;
        self.cell_indices_to_ids.push(id);
        self.cells.push(cell);
        Ok(())
    }

    fn create_grid(self) -> Result<FlatTriangleGrid<T>> {
        if self.cells.is_empty() {
            return Err(Error::EmptyGrid);
        }
        debug!(
            "Creating flat triangle grid with {} points and {} cells",
            self.points.len(),
            self.cells.len()
        );
        Ok(FlatTriangleGrid::new(
            self.points,
            self.cells,
            self.point_indices_to_ids,
            self.point_ids_to_indices,
            self.cell_indices_to_ids,
            self.cell_ids_to_indices,
        ))
    }
}
