//! Definition of a grid

use crate::error::Result;
use crate::types::{CellLocalIndexPair, Ownership, RealScalar, ReferenceCellType};

pub trait Builder<const GDIM: usize> {
    //! Object that can be used to build a grid

    /// The geometric/physical dimension
    const GDIM: usize = GDIM;
    /// The type of the grid that the builder creates
    type Grid: Grid<T = Self::T>;
    /// The floating point type used for coordinates
    type T: RealScalar;
    /// The type of the data that is input to add a cell
    type CellData;
    /// The type of the data that must be provided when initialising the builder
    type GridMetadata;

    /// Create a new grid builder
    fn new(data: Self::GridMetadata) -> Self;

    /// Create a new grid builder with capacity for a given number of points and cells
    fn new_with_capacity(npoints: usize, ncells: usize, data: Self::GridMetadata) -> Self;

    /// Add a point to the grid
    fn add_point(&mut self, id: usize, data: [Self::T; GDIM]) -> Result<()>;

    /// Add a cell to the grid
    fn add_cell(&mut self, id: usize, cell_data: Self::CellData) -> Result<()>;

    /// Create the grid
    fn create_grid(self) -> Result<Self::Grid>;
}

pub trait Grid {
    //! A grid
    //!
    //! Entities of each dimension are numbered contiguously from 0. Vertices (dimension 0)
    //! are the points at the corners of the cells; cells have dimension [Grid::topology_dim].

    /// The floating point type used for coordinates
    type T: RealScalar;

    /// The (topological) dimension of the cells
    fn topology_dim(&self) -> usize;

    /// The (geometric) dimension of the space the grid is embedded in
    fn geometry_dim(&self) -> usize;

    /// All entity types of the given dimension that are included in the grid
    fn entity_types(&self, dim: usize) -> &[ReferenceCellType];

    /// The number of entities of type `etype`
    fn entity_count(&self, etype: ReferenceCellType) -> usize;

    /// The number of entities of dimension `dim`
    fn entity_count_by_dim(&self, dim: usize) -> usize {
        self.entity_types(dim)
            .iter()
            .map(|&t| self.entity_count(t))
            .sum()
    }

    /// The number of cells
    fn cell_count(&self) -> usize {
        self.entity_count_by_dim(self.topology_dim())
    }

    /// The type of a cell
    fn cell_type(&self, index: usize) -> Option<ReferenceCellType>;

    /// Get the indices of entities of dimension `dim` that are sub-entities of the cell with index `index`
    ///
    /// The entities are ordered as the sub-entities of the reference cell.
    fn cell_to_entities(&self, index: usize, dim: usize) -> Option<&[usize]>;

    /// Get the cells that are connected to the entity with dimension `dim` and index `index`
    fn entity_to_cells(&self, dim: usize, index: usize) -> Option<&[CellLocalIndexPair]>;

    /// Get the indices of the vertices of the entity with dimension `dim` and index `index`
    fn entity_vertices(&self, dim: usize, index: usize) -> Option<&[usize]>;

    /// The coordinates of a vertex
    fn vertex(&self, index: usize) -> Option<&[Self::T]>;

    /// Write the midpoint of a cell into `point`
    fn cell_midpoint(&self, index: usize, point: &mut [Self::T]);

    /// The volume (area for a surface cell) of a cell
    fn cell_volume(&self, index: usize) -> Self::T;

    /// The diameter of the inscribed circle of a cell
    fn cell_diameter(&self, index: usize) -> Self::T;

    /// Write the unit normal to a cell into `normal`
    fn cell_normal(&self, index: usize, normal: &mut [Self::T]);

    /// Map a point on the reference cell to the physical cell with index `index`
    fn reference_to_physical(&self, index: usize, reference_point: &[Self::T], point: &mut [Self::T]);

    /// Write the jacobian of the reference-to-physical map of a cell into `jacobian`
    ///
    /// `jacobian` has shape [geometry_dim, topology_dim] and uses row-major ordering
    fn cell_jacobian(&self, index: usize, jacobian: &mut [Self::T]);

    /// Get the id of a vertex from its index
    fn vertex_index_to_id(&self, index: usize) -> Option<usize>;

    /// Get the index of a vertex from its id
    fn vertex_id_to_index(&self, id: usize) -> Option<usize>;

    /// Get the id of a cell from its index
    fn cell_index_to_id(&self, index: usize) -> Option<usize>;

    /// Get the index of a cell from its id
    fn cell_id_to_index(&self, id: usize) -> Option<usize>;

    /// Get the ownership of a cell
    fn cell_ownership(&self, _index: usize) -> Ownership {
        Ownership::Owned
    }

    /// Check if the grid is stored in serial
    fn is_serial(&self) -> bool {
        true
    }
}
