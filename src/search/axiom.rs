//! Axiom detection.
//!
//! A sequent at fixpoint is an axiom (proof-theoretically closed, i.e.
//! unsatisfiable under the assumptions made so far) when it contains the
//! empty clause or two distinct unit clauses on the same variable with
//! opposing polarities.

use crate::data::Sequent;

/// Decide whether `seq` is closed. Quadratic in the number of unit
/// clauses, which propagation has already collapsed.
pub fn is_axiom(seq: &Sequent) -> bool {
    for (i, clause) in seq.clauses().iter().enumerate() {
        if clause.is_empty() {
            return true;
        }
        if !clause.is_unit() {
            continue;
        }
        let lit = clause.literals()[0];
        for other in seq.clauses().iter().skip(i + 1) {
            if other.is_unit() && lit.complements(&other.literals()[0]) {
                return true;
            }
        }
    }
    false
}
