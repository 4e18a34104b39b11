pub mod bonds;
pub mod lattice;
