//! Depth-first search driver.
//!
//! The driver owns an explicit stack of sequents rather than recursing,
//! so adversarial inputs cannot overrun the native call stack. Each
//! popped sequent is propagated to fixpoint, discarded if it is an axiom,
//! and otherwise either reported as an open leaf (satisfiable, search
//! halts) or split by an atomic cut into two children.

use log::debug;

use crate::data::{Clause, Sequent};
use crate::search::witness::{extract_model, Model};
use crate::search::{axiom, cut, simplify};

const LOG_TARGET: &str = "driver";

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// An open leaf was reached; the model satisfies the input.
    Satisfiable(Model),
    /// Every branch of the search tree closed.
    Unsatisfiable,
}

impl Verdict {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, Verdict::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            Verdict::Satisfiable(model) => Some(model),
            Verdict::Unsatisfiable => None,
        }
    }
}

/// Counters describing one completed search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub sequents_examined: usize,
    pub propagation_steps: usize,
    pub axioms_detected: usize,
    pub cuts_applied: usize,
    pub peak_stack_depth: usize,
}

/// Depth-first exploration of the propagate/cut search tree.
pub struct Solver {
    stack: Vec<Sequent>,
    stats: SearchStats,
}

impl Solver {
    pub fn new(clauses: Vec<Clause>) -> Self {
        let root = Sequent::from_clauses(clauses);
        Self {
            stack: vec![root],
            stats: SearchStats { peak_stack_depth: 1, ..SearchStats::default() },
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run to a verdict. The first open leaf wins; remaining branches are
    /// dropped unexplored.
    pub fn search(&mut self) -> Verdict {
        while let Some(mut seq) = self.stack.pop() {
            self.stats.sequents_examined += 1;
            self.stats.propagation_steps += simplify::propagate_to_fixpoint(&mut seq);

            if axiom::is_axiom(&seq) {
                self.stats.axioms_detected += 1;
                debug!(
                    target: LOG_TARGET,
                    "branch closed, {} pending",
                    self.stack.len()
                );
                continue;
            }

            let Some(v) = cut::select_cut(&seq) else {
                debug!(
                    target: LOG_TARGET,
                    "open leaf after {} sequents",
                    self.stats.sequents_examined
                );
                self.stack.clear();
                return Verdict::Satisfiable(extract_model(&seq));
            };

            self.stats.cuts_applied += 1;
            debug!(
                target: LOG_TARGET,
                "cut on {} ({} occurrences)",
                v,
                seq.occurrence_count(v)
            );
            let (positive, negative) = cut::apply_atomic_cut(&seq, v);
            drop(seq);
            // The positive branch goes on top and is explored first.
            self.stack.push(negative);
            self.stack.push(positive);
            self.stats.peak_stack_depth =
                self.stats.peak_stack_depth.max(self.stack.len());
        }
        Verdict::Unsatisfiable
    }
}

/// Decide a clause set in one call.
pub fn solve(clauses: Vec<Clause>) -> Verdict {
    Solver::new(clauses).search()
}
