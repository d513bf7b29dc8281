// Domain layer: data model and the repository port. No dependencies beyond
// serde and the error types.

pub mod model;
pub mod repository;
