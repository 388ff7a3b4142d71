//! Witness extraction from an open leaf.

use std::fmt;

use crate::data::{Clause, Literal, Sequent, VarId};

/// A satisfying assignment, one literal per assigned variable, sorted by
/// variable id. Variables absent from the model are unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Model {
    assignments: Vec<Literal>,
}

impl Model {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.assignments
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn value_of(&self, v: VarId) -> Option<bool> {
        self.assignments
            .iter()
            .find(|lit| lit.var == v)
            .map(|lit| lit.positive)
    }

    /// True when every clause contains a literal this model makes true.
    pub fn satisfies(&self, clauses: &[Clause]) -> bool {
        clauses.iter().all(|clause| {
            clause
                .literals()
                .iter()
                .any(|lit| self.value_of(lit.var) == Some(lit.positive))
        })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.assignments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

/// Read a model off a sequent the cut selector declared open: every
/// clause is a unit, or shares no variable with any other clause. Units
/// force their literal; from each remaining clause the first literal is
/// chosen and the rest of its variables stay free.
pub fn extract_model(seq: &Sequent) -> Model {
    let mut assignments: Vec<Literal> = Vec::new();
    for clause in seq.clauses() {
        if clause.is_unit() {
            assignments.push(clause.literals()[0]);
        }
    }
    for clause in seq.clauses() {
        if !clause.is_unit() && !clause.is_empty() {
            assignments.push(clause.literals()[0]);
        }
    }
    assignments.sort_by_key(|lit| lit.var);
    Model { assignments }
}
