//! Lagrange elements

use crate::element::ciarlet::{Basis, CiarletElement, Family};
use crate::element::reference_cell;
use crate::error::{Error, Result};
use crate::traits::ElementFamily;
use crate::types::{Continuity, MapType, RealScalar, ReferenceCellType};
use rlst::{rlst_dynamic_array2, RandomAccessByRef, RandomAccessMut, Shape};
use std::marker::PhantomData;

/// Create a Lagrange element
pub fn create<T: RealScalar>(
    cell_type: ReferenceCellType,
    degree: usize,
    continuity: Continuity,
) -> Result<CiarletElement<T>> {
    if !matches!(
        cell_type,
        ReferenceCellType::Interval | ReferenceCellType::Triangle | ReferenceCellType::Quadrilateral
    ) {
        return Err(Error::UnsupportedCell {
            family: Family::Lagrange.name(),
            cell: cell_type,
        });
    }
    let tdim = reference_cell::dim(cell_type);
    let entity_counts = reference_cell::entity_counts(cell_type);
    let mut dof_counts = [vec![], vec![], vec![], vec![]];
    let mut lattice = vec![];

    if degree == 0 {
        if continuity == Continuity::Continuous {
            return Err(Error::ContinuousDegreeZero {
                family: Family::Lagrange.name(),
            });
        }
        for (d, count) in entity_counts.iter().enumerate().take(tdim) {
            dof_counts[d] = vec![0; *count];
        }
        dof_counts[tdim] = vec![1];
        lattice.push(vec![0; tdim]);
    } else {
        let vertices = reference_cell::integer_vertices(cell_type)
            .iter()
            .map(|v| v.iter().map(|&i| i as isize).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let k = degree as isize;
        let node = |v0: &[isize], steps: &[(isize, &[isize])]| -> Vec<usize> {
            (0..tdim)
                .map(|j| {
                    let offset = steps
                        .iter()
                        .map(|(i, v)| i * (v[j] - v0[j]))
                        .sum::<isize>();
                    (k * v0[j] + offset) as usize
                })
                .collect()
        };

        for v in &vertices {
            lattice.push(node(v, &[]));
            dof_counts[0].push(1);
        }
        for e in reference_cell::edges(cell_type) {
            let (v0, v1) = (&vertices[e[0]], &vertices[e[1]]);
            for i in 1..k {
                lattice.push(node(v0, &[(i, v1.as_slice())]));
            }
            dof_counts[1].push(degree - 1);
        }
        let faces = reference_cell::faces(cell_type);
        for (f, face_type) in reference_cell::entity_types(cell_type)[2].iter().enumerate() {
            let (v0, v1, v2) = (
                &vertices[faces[f][0]],
                &vertices[faces[f][1]],
                &vertices[faces[f][2]],
            );
            let mut npts = 0;
            for i0 in 1..k {
                let i1_end = match face_type {
                    ReferenceCellType::Triangle => k - i0,
                    _ => k,
                };
                for i1 in 1..i1_end {
                    lattice.push(node(v0, &[(i0, v1.as_slice()), (i1, v2.as_slice())]));
                    npts += 1;
                }
            }
            dof_counts[2].push(npts);
        }
    }

    let mut interpolation_points = rlst_dynamic_array2!(T, [lattice.len(), tdim]);
    if degree == 0 {
        for (j, m) in reference_cell::midpoint::<T>(cell_type).iter().enumerate() {
            *interpolation_points.get_mut([0, j]).unwrap() = *m;
        }
    } else {
        let k = T::from(degree).unwrap();
        for (i, node) in lattice.iter().enumerate() {
            for (j, n) in node.iter().enumerate() {
                *interpolation_points.get_mut([i, j]).unwrap() = T::from(*n).unwrap() / k;
            }
        }
    }

    let embedded_superdegree = if reference_cell::is_simplex(cell_type) {
        degree
    } else {
        degree * tdim
    };

    CiarletElement::create(
        Family::Lagrange,
        cell_type,
        degree,
        vec![],
        Basis::Lagrange { lattice },
        interpolation_points,
        dof_counts,
        MapType::Identity,
        continuity,
        embedded_superdegree,
    )
}

/// The value and derivative of `prod_{j<n} (k t - j) / (n - j)`
///
/// This is the 1D equispaced Lagrange factor that vanishes at `t = j / k` for `j < n` and is 1 at `t = n / k`.
fn lattice_factor<T: RealScalar>(t: T, n: usize, k: T) -> (T, T) {
    let mut value = T::one();
    let mut deriv = T::zero();
    for j in 0..n {
        let denom = T::from(n - j).unwrap();
        let a = (k * t - T::from(j).unwrap()) / denom;
        deriv = deriv * a + value * k / denom;
        value = value * a;
    }
    (value, deriv)
}

/// Tabulate Lagrange basis functions defined by their lattice nodes
pub(crate) fn tabulate<T: RealScalar>(
    cell_type: ReferenceCellType,
    degree: usize,
    lattice: &[Vec<usize>],
    points: &(impl RandomAccessByRef<2, Item = T> + Shape<2>),
    nderivs: usize,
    data: &mut impl RandomAccessMut<4, Item = T>,
) {
    let tdim = reference_cell::dim(cell_type);
    let k = T::from(degree).unwrap();
    let npoints = points.shape()[0];
    let mut x = vec![T::zero(); tdim];
    let mut grad = vec![T::zero(); tdim];

    for p in 0..npoints {
        for (j, xj) in x.iter_mut().enumerate() {
            *xj = *points.get([p, j]).unwrap();
        }
        for (b, node) in lattice.iter().enumerate() {
            // Each factor is (coordinate value, lattice index, gradient of the coordinate)
            let mut factors = Vec::with_capacity(2 * tdim);
            match cell_type {
                ReferenceCellType::Quadrilateral => {
                    for (j, (&xj, &nj)) in x.iter().zip(node).enumerate() {
                        let mut dt = vec![T::zero(); tdim];
                        dt[j] = T::one();
                        factors.push((xj, nj, dt.clone()));
                        dt[j] = -T::one();
                        factors.push((T::one() - xj, degree - nj, dt));
                    }
                }
                _ => {
                    let lambda0 = T::one() - x.iter().copied().sum::<T>();
                    let n0 = degree - node.iter().sum::<usize>();
                    factors.push((lambda0, n0, vec![-T::one(); tdim]));
                    for (j, (&xj, &nj)) in x.iter().zip(node).enumerate() {
                        let mut dt = vec![T::zero(); tdim];
                        dt[j] = T::one();
                        factors.push((xj, nj, dt));
                    }
                }
            }

            let mut value = T::one();
            grad.iter_mut().for_each(|g| *g = T::zero());
            for (t, n, dt) in &factors {
                let (fv, fd) = lattice_factor(*t, *n, k);
                for (g, d) in grad.iter_mut().zip(dt) {
                    *g = *g * fv + value * fd * *d;
                }
                value = value * fv;
            }

            *data.get_mut([0, p, b, 0]).unwrap() = value;
            if nderivs > 0 {
                for (j, g) in grad.iter().enumerate() {
                    *data.get_mut([j + 1, p, b, 0]).unwrap() = *g;
                }
            }
        }
    }
}

/// Lagrange element family
#[derive(Debug, Clone, PartialEq)]
pub struct LagrangeElementFamily<T: RealScalar> {
    degree: usize,
    continuity: Continuity,
    _t: PhantomData<T>,
}

impl<T: RealScalar> LagrangeElementFamily<T> {
    /// Create new family
    pub fn new(degree: usize, continuity: Continuity) -> Self {
        Self {
            degree,
            continuity,
            _t: PhantomData,
        }
    }
}

impl<T: RealScalar> ElementFamily for LagrangeElementFamily<T> {
    type T = T;
    type FiniteElement = CiarletElement<T>;
    fn element(&self, cell_type: ReferenceCellType) -> Result<CiarletElement<T>> {
        create::<T>(cell_type, self.degree, self.continuity)
    }
}
