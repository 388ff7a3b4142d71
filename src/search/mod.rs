//! The proof-search engine: unit propagation, axiom detection, atomic
//! cut, and the depth-first driver that composes them into a decision
//! procedure.

mod axiom;
mod cut;
mod driver;
mod report;
mod simplify;
mod witness;

pub use axiom::is_axiom;
pub use cut::{apply_atomic_cut, select_cut};
pub use driver::{solve, SearchStats, Solver, Verdict};
pub use report::ReportFormatter;
pub use simplify::{propagate_step, propagate_to_fixpoint};
pub use witness::{extract_model, Model};
