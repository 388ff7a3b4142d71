//! Built-in test formulas.
//!
//! The full clause set over n variables contains one clause for every
//! polarity pattern, so every total assignment falsifies exactly one
//! clause and the formula is unsatisfiable. Dropping any single clause
//! leaves exactly the assignment that falsified it as a model.

use crate::data::{Clause, Literal, VarId};

/// All 2^n clauses over variables 1..=n. Clause `i` carries variable
/// `j` (0-based) positively iff bit `n-1-j` of `i` is clear, so clause 0
/// is all-positive and clause 2^n - 1 is all-negative.
pub fn full_clause_set(num_vars: usize) -> Vec<Clause> {
    assert!(num_vars >= 1, "a clause set needs at least one variable");
    let count = 1usize << num_vars;
    (0..count)
        .map(|i| {
            let literals = (0..num_vars)
                .map(|j| {
                    let positive = (i >> (num_vars - 1 - j)) & 1 == 0;
                    Literal::new(VarId::new(j as u32 + 1), positive)
                })
                .collect();
            Clause::new(literals)
        })
        .collect()
}

/// The full clause set with its last (all-negative) clause omitted;
/// satisfiable by assigning every variable true.
pub fn almost_full_clause_set(num_vars: usize) -> Vec<Clause> {
    let mut clauses = full_clause_set(num_vars);
    clauses.pop();
    clauses
}

#[cfg(test)]
mod tests {
    use super::{almost_full_clause_set, full_clause_set};
    use crate::data::{Literal, VarId};
    use crate::search::{solve, Verdict};

    #[test]
    fn one_variable_enumerates_both_polarities() {
        let clauses = full_clause_set(1);
        let rendered: Vec<Vec<i32>> = clauses
            .iter()
            .map(|c| c.literals().iter().map(Literal::to_dimacs).collect())
            .collect();
        assert_eq!(rendered, vec![vec![1], vec![-1]]);
    }

    #[test]
    fn clause_counts_double_per_variable() {
        assert_eq!(full_clause_set(3).len(), 8);
        assert_eq!(almost_full_clause_set(3).len(), 7);
        assert!(full_clause_set(4).iter().all(|c| c.len() == 4));
    }

    #[test]
    fn full_clause_sets_are_unsatisfiable() {
        for n in 1..=4 {
            assert_eq!(solve(full_clause_set(n)), Verdict::Unsatisfiable);
        }
    }

    #[test]
    fn dropping_the_last_clause_leaves_the_all_true_model() {
        for n in 1..=4 {
            let clauses = almost_full_clause_set(n);
            match solve(clauses.clone()) {
                Verdict::Satisfiable(model) => {
                    assert!(model.satisfies(&clauses));
                    for j in 1..=n as u32 {
                        assert_eq!(model.value_of(VarId::new(j)), Some(true));
                    }
                }
                Verdict::Unsatisfiable => panic!("formula has a model"),
            }
        }
    }
}
