use std::fmt;

use super::literal::{Literal, VarId};

/// An unordered disjunction of literals.
///
/// Two invariants hold for every clause the solver works on: no literal
/// appears twice, and no variable appears with both polarities (such a
/// clause is a tautology and is dropped by the parser before the search
/// ever sees it). Length zero is the empty clause, i.e. false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        debug_assert!(
            literals
                .iter()
                .enumerate()
                .all(|(i, a)| literals.iter().skip(i + 1).all(|b| a.var != b.var)),
            "clause must not repeat a variable"
        );
        Self { literals }
    }

    /// The empty clause.
    pub fn empty() -> Self {
        Self { literals: Vec::new() }
    }

    pub fn unit(literal: Literal) -> Self {
        Self { literals: vec![literal] }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// A unit clause forces its single literal.
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The literal on variable `v`, if the clause mentions it.
    pub fn find_variable(&self, v: VarId) -> Option<Literal> {
        self.literals.iter().copied().find(|lit| lit.var == v)
    }

    /// Index of the literal on variable `v`, if present.
    pub fn position_of_variable(&self, v: VarId) -> Option<usize> {
        self.literals.iter().position(|lit| lit.var == v)
    }

    /// Unordered O(1) removal: the last literal takes slot `k`.
    pub fn remove_literal_at(&mut self, k: usize) -> Literal {
        self.literals.swap_remove(k)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "0");
        }
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", lit)?;
        }
        write!(f, " 0")
    }
}
