//! Input/output
use super::FlatTriangleGrid;
use crate::traits::GmshIO;
use crate::types::RealScalar;

impl<T: RealScalar> GmshIO for FlatTriangleGrid<T> {
    fn to_gmsh_string(&self) -> String {
        let cell_count = self.cells_to_entities[0].len() / 3;
        let node_count = self.vertices.len();

        let mut gmsh_s = String::from("");
        gmsh_s.push_str("$MeshFormat\n");
        gmsh_s.push_str("4.1 0 8\n");
        gmsh_s.push_str("$EndMeshFormat\n");
        gmsh_s.push_str("$Nodes\n");
        gmsh_s.push_str(&format!("1 {node_count} 1 {node_count}\n"));
        gmsh_s.push_str(&format!("2 1 0 {node_count}\n"));
        for i in 0..node_count {
            gmsh_s.push_str(&format!("{}\n", i + 1));
        }
        for v in &self.vertices {
            gmsh_s.push_str(&format!("{} {} {}\n", v[0], v[1], v[2]));
        }
        gmsh_s.push_str("$EndNodes\n");
        gmsh_s.push_str("$Elements\n");

        gmsh_s.push_str(&format!("1 {cell_count} 1 {cell_count}\n"));
        gmsh_s.push_str(&format!("2 1 2 {cell_count}\n"));
        for (i, vertices) in self.cells_to_entities[0].chunks(3).enumerate() {
            gmsh_s.push_str(&format!("{}", i + 1));
            for v in vertices {
                gmsh_s.push_str(&format!(" {}", v + 1))
            }
            gmsh_s.push('\n');
        }
        gmsh_s.push_str("$EndElements\n");

        gmsh_s
    }
}
