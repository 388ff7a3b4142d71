//! Atomic cut: variable selection and branch construction.

use crate::data::{Clause, Literal, Sequent, VarId};

/// Pick the variable to branch on: the one with the most occurrences
/// across the current clauses, ties broken toward the smaller id.
///
/// Returns `None` when the maximum count is at most one. Every remaining
/// variable then appears in a single clause, so the sequent is satisfiable
/// by independent literal choices and branching would be wasted work. The
/// same rule keeps unit-clause variables out of consideration: after
/// propagation each occurs exactly once.
pub fn select_cut(seq: &Sequent) -> Option<VarId> {
    let mut best: Option<(VarId, usize)> = None;
    for (var, count) in seq.occurrence_counts() {
        let better = match best {
            None => true,
            Some((best_var, best_count)) => {
                count > best_count || (count == best_count && var < best_var)
            }
        };
        if better {
            best = Some((var, count));
        }
    }
    match best {
        Some((var, count)) if count > 1 => Some(var),
        _ => None,
    }
}

/// Split `seq` on variable `v` into the pair (v assumed true, v assumed
/// false). The input is not touched; each child is an independent deep
/// copy, already simplified with respect to the assumption.
pub fn apply_atomic_cut(seq: &Sequent, v: VarId) -> (Sequent, Sequent) {
    (assume(seq, v, true), assume(seq, v, false))
}

/// Copy `seq` under the assumption that `v` has the given polarity:
/// clauses satisfied by the assumption are dropped, the falsified literal
/// is stripped from the rest, and the assumption itself is appended as a
/// unit clause. A clause stripped to length zero is kept; the child's
/// axiom check reports it.
fn assume(seq: &Sequent, v: VarId, positive: bool) -> Sequent {
    let mut clauses = Vec::with_capacity(seq.len() + 1);
    for clause in seq.clauses() {
        match clause.find_variable(v) {
            Some(lit) if lit.positive == positive => {}
            Some(_) => {
                let rest = clause
                    .literals()
                    .iter()
                    .copied()
                    .filter(|lit| lit.var != v)
                    .collect();
                clauses.push(Clause::new(rest));
            }
            None => clauses.push(clause.clone()),
        }
    }
    clauses.push(Clause::unit(Literal::new(v, positive)));
    Sequent::from_clauses(clauses)
}
