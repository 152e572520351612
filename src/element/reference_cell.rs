//! Cell definitions

use crate::types::{RealScalar, ReferenceCellType};

/// The topological dimension of the cell
pub fn dim(cell: ReferenceCellType) -> usize {
    match cell {
        ReferenceCellType::Point => 0,
        ReferenceCellType::Interval => 1,
        ReferenceCellType::Triangle => 2,
        ReferenceCellType::Quadrilateral => 2,
        ReferenceCellType::Tetrahedron => 3,
        ReferenceCellType::Hexahedron => 3,
        ReferenceCellType::Prism => 3,
        ReferenceCellType::Pyramid => 3,
    }
}

/// Is the cell a simplex?
pub fn is_simplex(cell: ReferenceCellType) -> bool {
    matches!(
        cell,
        ReferenceCellType::Point
            | ReferenceCellType::Interval
            | ReferenceCellType::Triangle
            | ReferenceCellType::Tetrahedron
    )
}

/// The vertices of the reference cell as integer coordinates
pub(crate) fn integer_vertices(cell: ReferenceCellType) -> Vec<Vec<u8>> {
    match cell {
        ReferenceCellType::Point => vec![],
        ReferenceCellType::Interval => vec![vec![0], vec![1]],
        ReferenceCellType::Triangle => vec![vec![0, 0], vec![1, 0], vec![0, 1]],
        ReferenceCellType::Quadrilateral => vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]],
        ReferenceCellType::Tetrahedron => vec![
            vec![0, 0, 0],
            vec![1, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 1],
        ],
        ReferenceCellType::Hexahedron => vec![
            vec![0, 0, 0],
            vec![1, 0, 0],
            vec![0, 1, 0],
            vec![1, 1, 0],
            vec![0, 0, 1],
            vec![1, 0, 1],
            vec![0, 1, 1],
            vec![1, 1, 1],
        ],
        ReferenceCellType::Prism => vec![
            vec![0, 0, 0],
            vec![1, 0, 0],
            vec![0, 1, 0],
            vec![0, 0, 1],
            vec![1, 0, 1],
            vec![0, 1, 1],
        ],
        ReferenceCellType::Pyramid => vec![
            vec![0, 0, 0],
            vec![1, 0, 0],
            vec![0, 1, 0],
            vec![1, 1, 0],
            vec![0, 0, 1],
        ],
    }
}

/// The vertices of the reference cell
pub fn vertices<T: RealScalar>(cell: ReferenceCellType) -> Vec<Vec<T>> {
    integer_vertices(cell)
        .iter()
        .map(|v| v.iter().map(|&x| T::from(x).unwrap()).collect())
        .collect()
}

/// The midpoint of the cell
pub fn midpoint<T: RealScalar>(cell: ReferenceCellType) -> Vec<T> {
    let half = T::from(0.5).unwrap();
    let third = T::one() / T::from(3.0).unwrap();
    match cell {
        ReferenceCellType::Point => vec![],
        ReferenceCellType::Interval => vec![half],
        ReferenceCellType::Triangle => vec![third; 2],
        ReferenceCellType::Quadrilateral => vec![half; 2],
        ReferenceCellType::Tetrahedron => vec![T::from(0.25).unwrap(); 3],
        ReferenceCellType::Hexahedron => vec![half; 3],
        ReferenceCellType::Prism => vec![third, third, half],
        ReferenceCellType::Pyramid => vec![
            T::from(0.4).unwrap(),
            T::from(0.4).unwrap(),
            T::from(0.2).unwrap(),
        ],
    }
}

/// The edges of the reference cell
pub fn edges(cell: ReferenceCellType) -> Vec<Vec<usize>> {
    match cell {
        ReferenceCellType::Point => vec![],
        ReferenceCellType::Interval => vec![vec![0, 1]],
        ReferenceCellType::Triangle => vec![vec![1, 2], vec![0, 2], vec![0, 1]],
        ReferenceCellType::Quadrilateral => vec![vec![0, 1], vec![0, 2], vec![1, 3], vec![2, 3]],
        ReferenceCellType::Tetrahedron => vec![
            vec![2, 3],
            vec![1, 3],
            vec![1, 2],
            vec![0, 3],
            vec![0, 2],
            vec![0, 1],
        ],
        ReferenceCellType::Hexahedron => vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 4],
            vec![1, 3],
            vec![1, 5],
            vec![2, 3],
            vec![2, 6],
            vec![3, 7],
            vec![4, 5],
            vec![4, 6],
            vec![5, 7],
            vec![6, 7],
        ],
        ReferenceCellType::Prism => vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 4],
            vec![2, 5],
            vec![3, 4],
            vec![3, 5],
            vec![4, 5],
        ],
        ReferenceCellType::Pyramid => vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 4],
            vec![1, 3],
            vec![1, 4],
            vec![2, 3],
            vec![2, 4],
            vec![3, 4],
        ],
    }
}

/// The faces of the reference cell
pub fn faces(cell: ReferenceCellType) -> Vec<Vec<usize>> {
    match cell {
        ReferenceCellType::Point => vec![],
        ReferenceCellType::Interval => vec![],
        ReferenceCellType::Triangle => vec![vec![0, 1, 2]],
        ReferenceCellType::Quadrilateral => vec![vec![0, 1, 2, 3]],
        ReferenceCellType::Tetrahedron => {
            vec![vec![1, 2, 3], vec![0, 2, 3], vec![0, 1, 3], vec![0, 1, 2]]
        }
        ReferenceCellType::Hexahedron => vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 4, 5],
            vec![0, 2, 4, 6],
            vec![1, 3, 5, 7],
            vec![2, 3, 6, 7],
            vec![4, 5, 6, 7],
        ],
        ReferenceCellType::Prism => vec![
            vec![0, 1, 2],
            vec![0, 1, 3, 4],
            vec![0, 2, 3, 5],
            vec![1, 2, 4, 5],
            vec![3, 4, 5],
        ],
        ReferenceCellType::Pyramid => vec![
            vec![0, 1, 2, 3],
            vec![0, 1, 4],
            vec![0, 2, 4],
            vec![1, 3, 4],
            vec![2, 3, 4],
        ],
    }
}

/// The vertices of every sub-entity, indexed by \[dim\]\[entity\]
pub fn sub_entity_vertices(cell: ReferenceCellType) -> Vec<Vec<Vec<usize>>> {
    let tdim = dim(cell);
    let nvertices = integer_vertices(cell).len().max(1);
    (0..tdim + 1)
        .map(|d| match d {
            _ if d == tdim => vec![(0..nvertices).collect()],
            0 => (0..nvertices).map(|v| vec![v]).collect(),
            1 => edges(cell),
            _ => faces(cell),
        })
        .collect()
}

/// The types of the subentities of the reference cell
pub fn entity_types(cell: ReferenceCellType) -> Vec<Vec<ReferenceCellType>> {
    let mut types = sub_entity_vertices(cell)
        .iter()
        .enumerate()
        .map(|(d, entities)| {
            entities
                .iter()
                .map(|e| match (d, e.len()) {
                    (0, _) => ReferenceCellType::Point,
                    (1, _) => ReferenceCellType::Interval,
                    (2, 3) => ReferenceCellType::Triangle,
                    (2, _) => ReferenceCellType::Quadrilateral,
                    _ => cell,
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    types.resize(4, vec![]);
    types
}

/// The number of subentities of each dimension
pub fn entity_counts(cell: ReferenceCellType) -> Vec<usize> {
    entity_types(cell).iter().map(|t| t.len()).collect()
}

/// The connectivity of the reference cell
///
/// The indices of the result are \[i\]\[j\]\[k\]\[l\]: entry `l` of the list of
/// sub-entities of dimension `k` connected to entity `j` of dimension `i`.
pub fn connectivity(cell: ReferenceCellType) -> Vec<Vec<Vec<Vec<usize>>>> {
    let entities = sub_entity_vertices(cell);
    entities
        .iter()
        .map(|entities_i| {
            entities_i
                .iter()
                .map(|e| {
                    entities
                        .iter()
                        .map(|entities_k| {
                            entities_k
                                .iter()
                                .enumerate()
                                .filter(|(_, other)| {
                                    other.iter().all(|v| e.contains(v))
                                        || e.iter().all(|v| other.contains(v))
                                })
                                .map(|(n, _)| n)
                                .collect()
                        })
                        .collect()
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! test_cell {

        ($($cell:ident),+) => {

        $(
            paste! {

                #[test]
                fn [<test_ $cell:lower>]() {
                    let v = vertices::<f64>(ReferenceCellType::[<$cell>]);
                    let d = dim(ReferenceCellType::[<$cell>]);
                    let ec = entity_counts(ReferenceCellType::[<$cell>]);
                    let et = entity_types(ReferenceCellType::[<$cell>]);
                    let conn = connectivity(ReferenceCellType::[<$cell>]);
                    for i in 0..d+1 {
                        assert_eq!(ec[i], et[i].len());
                        assert_eq!(ec[i], conn[i].len());
                    }
                    assert_eq!(ec[d], 1);
                    assert_eq!(et[d][0], ReferenceCellType::[<$cell>]);
                    assert_eq!(ec[0], v.len());
                    for i in v {
                        assert_eq!(i.len(), d);
                    }

                    for v_n in 0..ec[0] {
                        assert_eq!(&conn[0][v_n][0], &[v_n]);
                    }
                    for e_n in 0..ec[1] {
                        assert_eq!(&conn[1][e_n][0], &edges(ReferenceCellType::[<$cell>])[e_n]);
                    }
                    for e_dim in 0..d {
                        for e_n in 0..ec[e_dim] {
                            let e_vertices = &conn[e_dim][e_n][0];
                            for c_dim in 0..d + 1 {
                                let connectivity = &conn[e_dim][e_n][c_dim];
                                if e_dim == c_dim {
                                    assert_eq!(connectivity, &[e_n]);
                                } else {
                                    for c_n in connectivity {
                                        let c_vertices = &conn[c_dim][*c_n][0];
                                        if e_dim < c_dim {
                                            for i in e_vertices {
                                                assert!(c_vertices.contains(i));
                                            }
                                        } else {
                                            for i in c_vertices {
                                                assert!(e_vertices.contains(i));
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

            }
        )*
        };
    }

    test_cell!(
        Interval,
        Triangle,
        Quadrilateral,
        Tetrahedron,
        Hexahedron,
        Prism,
        Pyramid
    );

    #[test]
    fn test_triangle_edges_connectivity() {
        let conn = connectivity(ReferenceCellType::Triangle);
        assert_eq!(conn[0][0][1], vec![1, 2]);
        assert_eq!(conn[1][0][0], vec![1, 2]);
        assert_eq!(conn[2][0][1], vec![0, 1, 2]);
    }

    #[test]
    fn test_prism_face_types() {
        let et = entity_types(ReferenceCellType::Prism);
        assert_eq!(
            et[2],
            vec![
                ReferenceCellType::Triangle,
                ReferenceCellType::Quadrilateral,
                ReferenceCellType::Quadrilateral,
                ReferenceCellType::Quadrilateral,
                ReferenceCellType::Triangle,
            ]
        );
        assert_eq!(entity_counts(ReferenceCellType::Prism), vec![6, 9, 5, 1]);
    }
}
