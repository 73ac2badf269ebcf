pub mod error;
pub mod geometry;
pub mod graph;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{NavMeshError, Result};
