//! Test input/output
use bempp_space::grid::regular_sphere;
use bempp_space::traits::{GmshIO, Grid};
use bempp_space::types::ReferenceCellType;
use bempp_space::Error;
use std::fs;

extern crate blas_src;
extern crate lapack_src;

/// Read the number of entities from the header line of a Gmsh 4.1 section
fn section_count(gmsh: &str, section: &str) -> usize {
    let mut lines = gmsh.lines().skip_while(|l| *l != section).skip(1);
    let header = lines.next().unwrap();
    header.split_whitespace().nth(1).unwrap().parse().unwrap()
}

#[test]
fn test_regular_sphere_gmsh_io() {
    let g = regular_sphere::<f64>(2).unwrap();
    let filename = std::env::temp_dir().join("_test_io_sphere.msh");
    g.export_as_gmsh(&filename).unwrap();

    let gmsh = fs::read_to_string(&filename).unwrap();
    fs::remove_file(&filename).unwrap();

    assert!(gmsh.starts_with("$MeshFormat\n4.1 0 8\n$EndMeshFormat\n"));
    assert_eq!(section_count(&gmsh, "$Nodes"), 66);
    assert_eq!(section_count(&gmsh, "$Elements"), 128);
    assert_eq!(
        section_count(&gmsh, "$Nodes"),
        g.entity_count(ReferenceCellType::Point)
    );
    assert_eq!(section_count(&gmsh, "$Elements"), g.cell_count());

    let elements = gmsh
        .lines()
        .skip_while(|l| *l != "$Elements")
        .skip(3)
        .take_while(|l| *l != "$EndElements")
        .collect::<Vec<_>>();
    assert_eq!(elements.len(), 128);
    for (i, line) in elements.iter().enumerate() {
        let entries = line
            .split_whitespace()
            .map(|x| x.parse::<usize>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(entries[0], i + 1);
        let vertices = g.cell_to_entities(i, 0).unwrap();
        assert_eq!(
            entries[1..].to_vec(),
            vertices.iter().map(|v| v + 1).collect::<Vec<_>>()
        );
    }
}

#[test]
fn test_gmsh_export_to_missing_directory() {
    let g = regular_sphere::<f64>(0).unwrap();
    let filename = std::env::temp_dir()
        .join("_bempp_space_missing_directory")
        .join("sphere.msh");
    assert!(matches!(g.export_as_gmsh(filename), Err(Error::Io(_))));
}
