//! Grids of standard shapes

use crate::error::Result;
use crate::grid::flat_triangle_grid::{FlatTriangleGrid, FlatTriangleGridBuilder};
use crate::traits::Builder;
use crate::types::RealScalar;
use log::debug;
use num::Float;
use std::collections::{hash_map::Entry::Vacant, HashMap};

/// Create a regular sphere
///
/// A regular sphere is created by starting with a regular octahedron. The shape is then refined `refinement_level` times.
/// Each time the grid is refined, each triangle is split into four triangles (by adding lines connecting the midpoints of
/// each edge). The new points are then scaled so that they are a distance of 1 from the origin.
///
/// The cells are oriented so that their normals point outwards.
pub fn regular_sphere<T: RealScalar>(refinement_level: u32) -> Result<FlatTriangleGrid<T>> {
    let zero = T::zero();
    let one = T::one();
    let half = T::from(0.5).unwrap();
    let mut points = vec![
        [zero, zero, one],
        [one, zero, zero],
        [zero, one, zero],
        [-one, zero, zero],
        [zero, -one, zero],
        [zero, zero, -one],
    ];
    let mut cells = vec![
        [0, 1, 2],
        [0, 2, 3],
        [0, 3, 4],
        [0, 4, 1],
        [5, 2, 1],
        [5, 3, 2],
        [5, 4, 3],
        [5, 1, 4],
    ];

    for level in 0..refinement_level {
        debug!("Refining regular sphere: level {} of {refinement_level}", level + 1);
        let mut edge_points = HashMap::new();
        let mut new_cells = Vec::with_capacity(4 * cells.len());
        for c in &cells {
            let mut edges = [0; 3];
            for (edge, [i, j]) in edges.iter_mut().zip([[1, 2], [0, 2], [0, 1]]) {
                let pt_i = usize::min(c[i], c[j]);
                let pt_j = usize::max(c[i], c[j]);
                if let Vacant(e) = edge_points.entry((pt_i, pt_j)) {
                    let (v_i, v_j) = (points[pt_i], points[pt_j]);
                    let mut new_pt = [0, 1, 2].map(|k| half * (v_i[k] + v_j[k]));
                    let size = Float::sqrt(new_pt.iter().map(|x| Float::powi(*x, 2)).sum::<T>());
                    for x in new_pt.iter_mut() {
                        *x = *x / size;
                    }
                    e.insert(points.len());
                    points.push(new_pt);
                }
                *edge = edge_points[&(pt_i, pt_j)];
            }
            new_cells.push([c[0], edges[2], edges[1]]);
            new_cells.push([c[1], edges[0], edges[2]]);
            new_cells.push([c[2], edges[1], edges[0]]);
            new_cells.push([edges[0], edges[1], edges[2]]);
        }
        cells = new_cells;
    }

    let mut b = FlatTriangleGridBuilder::new_with_capacity(points.len(), cells.len(), ());
    for (i, p) in points.into_iter().enumerate() {
        b.add_point(i, p)?;
    }
    for (i, v) in cells.into_iter().enumerate() {
        b.add_cell(i, v)?;
    }

    b.create_grid()
}

/// Create a square grid with triangle cells
///
/// Create a grid of the square \[0,1\]^2 with triangle cells. The input ncells is the number of cells
/// along each side of the square.
pub fn screen_triangles<T: RealScalar>(ncells: usize) -> Result<FlatTriangleGrid<T>> {
    let mut b = FlatTriangleGridBuilder::new_with_capacity(
        (ncells + 1) * (ncells + 1),
        2 * ncells * ncells,
        (),
    );

    let zero = T::zero();
    let n = T::from(ncells.max(1)).unwrap();
    for y in 0..ncells + 1 {
        for x in 0..ncells + 1 {
            b.add_point(
                y * (ncells + 1) + x,
                [T::from(x).unwrap() / n, T::from(y).unwrap() / n, zero],
            )?;
        }
    }
    for y in 0..ncells {
        for x in 0..ncells {
            let corner = y * (ncells + 1) + x;
            b.add_cell(
                2 * y * ncells + 2 * x,
                [corner, corner + 1, corner + ncells + 2],
            )?;
            b.add_cell(
                2 * y * ncells + 2 * x + 1,
                [corner, corner + ncells + 2, corner + ncells + 1],
            )?;
        }
    }

    b.create_grid()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::traits::Grid;
    use crate::types::ReferenceCellType;
    use approx::*;

    #[test]
    fn test_regular_sphere_0() {
        let g = regular_sphere::<f64>(0).unwrap();
        assert_eq!(g.entity_count(ReferenceCellType::Point), 6);
        assert_eq!(g.entity_count(ReferenceCellType::Interval), 12);
        assert_eq!(g.entity_count(ReferenceCellType::Triangle), 8);
    }

    #[test]
    fn test_regular_spheres() {
        for level in 1..4 {
            let g = regular_sphere::<f32>(level).unwrap();
            assert_eq!(g.cell_count(), 8 * usize::pow(4, level));
        }
    }

    #[test]
    fn test_normal_is_outward() {
        for i in 0..3 {
            let g = regular_sphere::<f64>(i).unwrap();
            let points = vec![1.0 / 3.0, 1.0 / 3.0];
            let mut mapped_pt = vec![0.0; 3];
            let mut normal = vec![0.0; 3];
            for i in 0..g.cell_count() {
                g.reference_to_physical(i, &points, &mut mapped_pt);
                g.cell_normal(i, &mut normal);
                let dot = mapped_pt
                    .iter()
                    .zip(&normal)
                    .map(|(i, j)| i * j)
                    .sum::<f64>();
                assert!(dot > 0.0);
            }
        }
    }

    #[test]
    fn test_screen() {
        let g = screen_triangles::<f64>(4).unwrap();
        assert_eq!(g.entity_count(ReferenceCellType::Point), 25);
        assert_eq!(g.entity_count(ReferenceCellType::Interval), 56);
        assert_eq!(g.entity_count(ReferenceCellType::Triangle), 32);
        let area = (0..g.cell_count()).map(|c| g.cell_volume(c)).sum::<f64>();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);

        let mut normal = [0.0; 3];
        for c in 0..g.cell_count() {
            g.cell_normal(c, &mut normal);
            assert_relative_eq!(normal[2], 1.0);
        }
    }

    #[test]
    fn test_empty_screen() {
        assert!(matches!(screen_triangles::<f64>(0), Err(Error::EmptyGrid)));
    }
}
