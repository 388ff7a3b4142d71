//! Unit propagation.
//!
//! Two rules are applied until neither applies. Unit subsumption: a unit
//! clause {l} makes any other clause containing l redundant, so that
//! clause is removed whole. Unit resolution: the complement of l cannot
//! hold, so it is deleted wherever it occurs. A clause emptied by
//! resolution stays in the sequent for the axiom check to report.

use log::{debug, trace};

use crate::data::Sequent;

const LOG_TARGET: &str = "simplify";

/// Perform one observable simplification step.
///
/// Returns true after removing one clause (unit subsumption) or one
/// literal (unit resolution); returns false only once the candidate queue
/// has drained without further work. Stale queue entries, indices whose
/// clause was swap-removed or is no longer a unit, are revalidated on pop
/// and discarded.
pub fn propagate_step(seq: &mut Sequent) -> bool {
    while let Some(i) = seq.peek_unit_candidate() {
        if !seq.candidate_is_live(i) {
            seq.discard_unit_candidate();
            continue;
        }
        let unit = seq.clause(i).literals()[0];
        for j in 0..seq.len() {
            if j == i {
                continue;
            }
            if let Some(k) = seq.clause(j).position_of_variable(unit.var) {
                if seq.clause(j).literals()[k].positive == unit.positive {
                    trace!(target: LOG_TARGET, "unit {} subsumes {}", unit, seq.clause(j));
                    seq.remove_clause(j);
                } else {
                    trace!(target: LOG_TARGET, "unit {} resolves {}", unit, seq.clause(j));
                    seq.remove_literal(j, k);
                }
                return true;
            }
        }
        // This unit cannot simplify anything further.
        seq.discard_unit_candidate();
    }
    false
}

/// Apply `propagate_step` until it reports no work; returns the number of
/// steps taken.
pub fn propagate_to_fixpoint(seq: &mut Sequent) -> usize {
    let mut steps = 0;
    while propagate_step(seq) {
        steps += 1;
    }
    if steps > 0 {
        debug!(
            target: LOG_TARGET,
            "fixpoint after {} steps, {} clauses remain",
            steps,
            seq.len()
        );
    }
    steps
}
