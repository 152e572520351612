//! Grid input/output
use crate::error::Result;
use std::fs;
use std::path::Path;

pub trait GmshIO {
    //! Grid I/O for Gmsh

    /// Generate the Gmsh string for a grid
    fn to_gmsh_string(&self) -> String;

    /// Export as Gmsh
    fn export_as_gmsh(&self, filename: impl AsRef<Path>) -> Result<()> {
        fs::write(filename, self.to_gmsh_string())?;
        Ok(())
    }
}
