//! Input handling for DIMACS CNF files.

mod dimacs;

pub use dimacs::{CnfFormula, DimacsError, DimacsParser};
