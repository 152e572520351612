//! Functions and function spaces

mod function_space;

pub use function_space::{function_space, SerialFunctionSpace};
