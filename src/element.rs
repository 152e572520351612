//! Finite elements

pub mod ciarlet;
pub mod reference_cell;

pub use ciarlet::{
    create_family, CiarletElement, CiarletFamily, Family, LagrangeElementFamily,
    RaviartThomasElementFamily,
};
