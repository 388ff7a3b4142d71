//! End-to-end scenarios through the parser, solver, and report.

use seqsat::{solve, DimacsParser, ReportFormatter, VarId, Verdict};

fn decide(input: &str) -> Verdict {
    let formula = DimacsParser::new().parse_str(input).expect("parse failed");
    solve(formula.clauses)
}

#[test]
fn empty_formula_is_satisfiable_with_the_empty_model() {
    match decide("p cnf 0 0\n") {
        Verdict::Satisfiable(model) => assert!(model.is_empty()),
        Verdict::Unsatisfiable => panic!("the empty conjunction holds"),
    }
}

#[test]
fn a_single_unit_fixes_its_variable() {
    let verdict = decide("p cnf 1 1\n1 0\n");
    let model = verdict.model().expect("satisfiable");
    assert_eq!(model.value_of(VarId::new(1)), Some(true));

    let verdict = decide("p cnf 1 1\n-1 0\n");
    let model = verdict.model().expect("satisfiable");
    assert_eq!(model.value_of(VarId::new(1)), Some(false));
}

#[test]
fn contradictory_units_refute() {
    assert_eq!(decide("p cnf 1 2\n1 0\n-1 0\n"), Verdict::Unsatisfiable);
}

#[test]
fn the_full_two_variable_clause_set_refutes() {
    let input = "p cnf 2 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n";
    assert_eq!(decide(input), Verdict::Unsatisfiable);
}

#[test]
fn omitting_one_clause_yields_a_model_of_the_rest() {
    let input = "p cnf 2 3\n1 2 0\n-1 2 0\n1 -2 0\n";
    let formula = DimacsParser::new().parse_str(input).expect("parse failed");
    let reference = formula.clauses.clone();
    match solve(formula.clauses) {
        Verdict::Satisfiable(model) => assert!(model.satisfies(&reference)),
        Verdict::Unsatisfiable => panic!("three of four clauses are satisfiable"),
    }
}

#[test]
fn unit_propagation_alone_refutes() {
    let input = "p cnf 3 4\n1 2 3 0\n-1 0\n-2 0\n-3 0\n";
    assert_eq!(decide(input), Verdict::Unsatisfiable);
}

#[test]
fn runs_are_reproducible() {
    let input = "p cnf 4 6\n1 2 0\n-1 3 0\n-2 -3 0\n2 4 0\n-3 -4 0\n1 -4 0\n";
    let first = decide(input);
    let second = decide(input);
    assert_eq!(first, second);

    let mut first_report = ReportFormatter::new();
    first_report.write_verdict(&first);
    let mut second_report = ReportFormatter::new();
    second_report.write_verdict(&second);
    assert_eq!(first_report.output(), second_report.output());
}

#[test]
fn reports_follow_the_dimacs_convention() {
    let mut report = ReportFormatter::new();
    report.write_comment("scenario");
    report.write_verdict(&decide("p cnf 1 2\n1 0\n-1 0\n"));
    assert_eq!(report.output(), "c scenario\ns UNSATISFIABLE\n");

    let mut report = ReportFormatter::new();
    report.write_verdict(&decide("p cnf 1 1\n1 0\n"));
    assert_eq!(report.output(), "s SATISFIABLE\nv 1 0\n");
}
