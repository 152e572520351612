//! Flat triangle grid

use crate::element::reference_cell;
use crate::traits::Grid;
use crate::types::{CellLocalIndexPair, RealScalar, ReferenceCellType};
use itertools::izip;
use log::warn;
use num::Float;
use rayon::prelude::*;
use std::collections::HashMap;

/// Geometric data of a single flat triangle
#[derive(Debug, Clone)]
struct CellGeometry<T: RealScalar> {
    midpoint: [T; 3],
    volume: T,
    diameter: T,
    normal: [T; 3],
    /// Row-major 3 by 2 jacobian of the reference-to-physical map
    jacobian: [T; 6],
}

impl<T: RealScalar> CellGeometry<T> {
    fn compute(index: usize, v0: &[T; 3], v1: &[T; 3], v2: &[T; 3]) -> Self {
        let third = T::one() / T::from(3.0).unwrap();
        let midpoint = [0, 1, 2].map(|i| (v0[i] + v1[i] + v2[i]) * third);

        let a = [0, 1, 2].map(|i| v1[i] - v0[i]);
        let b = [0, 1, 2].map(|i| v2[i] - v0[i]);
        let jacobian = [a[0], b[0], a[1], b[1], a[2], b[2]];

        let mut normal = [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ];
        let normal_length = norm(&normal);
        if normal_length > T::zero() {
            for n in normal.iter_mut() {
                *n = *n / normal_length;
            }
        } else {
            warn!("Cell {index} is degenerate: it has zero area");
        }

        Self {
            midpoint,
            volume: normal_length / T::from(2.0).unwrap(),
            diameter: compute_diameter_triangle(v0, v1, v2),
            normal,
            jacobian,
        }
    }
}

fn norm<T: RealScalar>(v: &[T; 3]) -> T {
    Float::sqrt(v.iter().map(|x| *x * *x).sum::<T>())
}

fn distance<T: RealScalar>(v: &[T; 3], w: &[T; 3]) -> T {
    norm(&[v[0] - w[0], v[1] - w[1], v[2] - w[2]])
}

/// The diameter of the inscribed circle of a triangle
fn compute_diameter_triangle<T: RealScalar>(v0: &[T; 3], v1: &[T; 3], v2: &[T; 3]) -> T {
    let a = distance(v0, v1);
    let b = distance(v0, v2);
    let c = distance(v1, v2);
    let s = a + b + c;
    if s == T::zero() {
        return T::zero();
    }
    // Rounding can make the product slightly negative for nearly collinear points
    Float::sqrt(Float::max(
        (b + c - a) * (a + c - b) * (a + b - c) / s,
        T::zero(),
    ))
}

/// A grid of flat triangles embedded in 3D space
///
/// Every point of the grid is a vertex. Edges are numbered in the order in which they
/// are first met when walking through the cells.
#[derive(Debug)]
pub struct FlatTriangleGrid<T: RealScalar> {
    pub(super) vertices: Vec<[T; 3]>,
    geometry: Vec<CellGeometry<T>>,

    // Topological information, indexed by entity dimension
    entity_types: [Vec<ReferenceCellType>; 3],
    pub(super) cells_to_entities: [Vec<usize>; 3],
    entities_to_vertices: [Vec<usize>; 3],
    entities_to_cells: [Vec<Vec<CellLocalIndexPair>>; 3],

    vertex_indices_to_ids: Vec<usize>,
    vertex_ids_to_indices: HashMap<usize, usize>,
    cell_indices_to_ids: Vec<usize>,
    cell_ids_to_indices: HashMap<usize, usize>,
}

impl<T: RealScalar> FlatTriangleGrid<T> {
    /// Create a flat triangle grid
    ///
    /// `cells` holds vertex indices (not ids); the caller must ensure they are all less than `vertices.len()`.
    pub(crate) fn new(
        vertices: Vec<[T; 3]>,
        cells: Vec<[usize; 3]>,
        vertex_indices_to_ids: Vec<usize>,
        vertex_ids_to_indices: HashMap<usize, usize>,
        cell_indices_to_ids: Vec<usize>,
        cell_ids_to_indices: HashMap<usize, usize>,
    ) -> Self {
        let nvertices = vertices.len();
        let ncells = cells.len();

        // Compute geometry
        let geometry = cells
            .par_iter()
            .enumerate()
            .map(|(index, cell)| {
                CellGeometry::compute(
                    index,
                    &vertices[cell[0]],
                    &vertices[cell[1]],
                    &vertices[cell[2]],
                )
            })
            .collect::<Vec<_>>();

        // Compute topology
        let ref_edges = reference_cell::edges(ReferenceCellType::Triangle);
        let mut edge_indices = HashMap::<(usize, usize), usize>::new();
        let mut edge_to_vertices = vec![];
        let mut edge_to_cells: Vec<Vec<CellLocalIndexPair>> = vec![];
        let mut vertex_to_cells = vec![vec![]; nvertices];
        let mut cells_to_edges = Vec::with_capacity(3 * ncells);

        for (cell_index, cell) in cells.iter().enumerate() {
            for (local_index, vertex) in cell.iter().enumerate() {
                vertex_to_cells[*vertex].push(CellLocalIndexPair::new(cell_index, local_index));
            }

            for (local_index, rc) in ref_edges.iter().enumerate() {
                let mut first = cell[rc[0]];
                let mut second = cell[rc[1]];
                if first > second {
                    std::mem::swap(&mut first, &mut second);
                }
                let edge_index = *edge_indices.entry((first, second)).or_insert_with(|| {
                    edge_to_vertices.push(first);
                    edge_to_vertices.push(second);
                    edge_to_cells.push(vec![]);
                    edge_to_cells.len() - 1
                });
                edge_to_cells[edge_index].push(CellLocalIndexPair::new(cell_index, local_index));
                cells_to_edges.push(edge_index);
            }
        }

        let cell_vertices = cells.iter().flatten().copied().collect::<Vec<_>>();

        Self {
            vertices,
            geometry,
            entity_types: [
                vec![ReferenceCellType::Point],
                vec![ReferenceCellType::Interval],
                vec![ReferenceCellType::Triangle],
            ],
            cells_to_entities: [cell_vertices.clone(), cells_to_edges, (0..ncells).collect()],
            entities_to_vertices: [(0..nvertices).collect(), edge_to_vertices, cell_vertices],
            entities_to_cells: [
                vertex_to_cells,
                edge_to_cells,
                (0..ncells)
                    .map(|i| vec![CellLocalIndexPair::new(i, 0)])
                    .collect(),
            ],
            vertex_indices_to_ids,
            vertex_ids_to_indices,
            cell_indices_to_ids,
            cell_ids_to_indices,
        }
    }
}

impl<T: RealScalar> Grid for FlatTriangleGrid<T> {
    type T = T;

    fn topology_dim(&self) -> usize {
        2
    }

    fn geometry_dim(&self) -> usize {
        3
    }

    fn entity_types(&self, dim: usize) -> &[ReferenceCellType] {
        match self.entity_types.get(dim) {
            Some(t) => t,
            None => &[],
        }
    }

    fn entity_count(&self, etype: ReferenceCellType) -> usize {
        match etype {
            ReferenceCellType::Point => self.vertices.len(),
            ReferenceCellType::Interval => self.entities_to_cells[1].len(),
            ReferenceCellType::Triangle => self.geometry.len(),
            _ => 0,
        }
    }

    fn cell_type(&self, index: usize) -> Option<ReferenceCellType> {
        if index < self.geometry.len() {
            Some(ReferenceCellType::Triangle)
        } else {
            None
        }
    }

    fn cell_to_entities(&self, index: usize, dim: usize) -> Option<&[usize]> {
        let stride = [3, 3, 1].get(dim)?;
        self.cells_to_entities[dim].get(stride * index..stride * (index + 1))
    }

    fn entity_to_cells(&self, dim: usize, index: usize) -> Option<&[CellLocalIndexPair]> {
        self.entities_to_cells
            .get(dim)?
            .get(index)
            .map(|c| c.as_slice())
    }

    fn entity_vertices(&self, dim: usize, index: usize) -> Option<&[usize]> {
        let stride = dim + 1;
        self.entities_to_vertices
            .get(dim)?
            .get(stride * index..stride * (index + 1))
    }

    fn vertex(&self, index: usize) -> Option<&[T]> {
        self.vertices.get(index).map(|v| v.as_slice())
    }

    fn cell_midpoint(&self, index: usize, point: &mut [T]) {
        point.copy_from_slice(&self.geometry[index].midpoint);
    }

    fn cell_volume(&self, index: usize) -> T {
        self.geometry[index].volume
    }

    fn cell_diameter(&self, index: usize) -> T {
        self.geometry[index].diameter
    }

    fn cell_normal(&self, index: usize, normal: &mut [T]) {
        normal.copy_from_slice(&self.geometry[index].normal);
    }

    fn reference_to_physical(&self, index: usize, reference_point: &[T], point: &mut [T]) {
        let v0 = &self.vertices[self.cells_to_entities[0][3 * index]];
        let jacobian = &self.geometry[index].jacobian;
        for (p, v, j) in izip!(point.iter_mut(), v0, jacobian.chunks(2)) {
            *p = *v + j[0] * reference_point[0] + j[1] * reference_point[1];
        }
    }

    fn cell_jacobian(&self, index: usize, jacobian: &mut [T]) {
        jacobian.copy_from_slice(&self.geometry[index].jacobian);
    }

    fn vertex_index_to_id(&self, index: usize) -> Option<usize> {
        self.vertex_indices_to_ids.get(index).copied()
    }

    fn vertex_id_to_index(&self, id: usize) -> Option<usize> {
        self.vertex_ids_to_indices.get(&id).copied()
    }

    fn cell_index_to_id(&self, index: usize) -> Option<usize> {
        self.cell_indices_to_ids.get(index).copied()
    }

    fn cell_id_to_index(&self, id: usize) -> Option<usize> {
        self.cell_ids_to_indices.get(&id).copied()
    }
}
