//! seqsat command-line interface.
//!
//! Decides the satisfiability of a DIMACS CNF file, or runs the built-in
//! self-test over `-test N` variables. Exit code 0 means a decision was
//! reached (either verdict); usage and I/O problems exit 1, parse errors
//! exit 2.
#![forbid(unsafe_code)]

use std::env;
use std::path::Path;
use std::process;

use seqsat::{
    almost_full_clause_set, full_clause_set, solve, DimacsError, DimacsParser,
    ReportFormatter, Solver,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `-test N` builds 2^N clauses of N literals each; past this the
/// generator alone is hopeless.
const SELF_TEST_LIMIT: usize = 20;

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options] <cnf-file>", program);
    eprintln!("       {} -test N", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help       Show this help message");
    eprintln!("  -v, --version    Show version information");
    eprintln!("  -test N          Decide the full and almost-full clause sets");
    eprintln!("                   over N variables (1 <= N <= {})", SELF_TEST_LIMIT);
    eprintln!();
    eprintln!("Give exactly one of a CNF file or -test.");
}

fn run_file(path: &str) -> ReportFormatter {
    let formula = match DimacsParser::new().parse_file(Path::new(path)) {
        Ok(formula) => formula,
        Err(DimacsError::Io(err)) => {
            eprintln!("seqsat: {}: {}", path, err);
            process::exit(1);
        }
        Err(err) => {
            eprintln!("seqsat: {}: {}", path, err);
            process::exit(2);
        }
    };

    let mut report = ReportFormatter::new();
    report.write_comment(&format!("reading {}", path));
    report.write_comment(&format!(
        "p cnf {} {} ({} literals)",
        formula.num_vars,
        formula.clauses.len(),
        formula.literal_count
    ));

    let mut solver = Solver::new(formula.clauses);
    let verdict = solver.search();
    report.write_stats(solver.stats());
    report.write_verdict(&verdict);
    report
}

fn run_self_test(num_vars: usize) -> ReportFormatter {
    let mut report = ReportFormatter::new();
    report.write_comment(&format!("self-test over {} variables", num_vars));

    report.write_comment("full clause set, expecting UNSATISFIABLE");
    report.write_verdict(&solve(full_clause_set(num_vars)));

    report.write_comment("one clause dropped, expecting SATISFIABLE");
    report.write_verdict(&solve(almost_full_clause_set(num_vars)));
    report
}

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].as_str();

    let mut test_vars: Option<usize> = None;
    let mut input_file: Option<String> = None;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return;
            }
            "-v" | "--version" => {
                println!("seqsat {}", VERSION);
                return;
            }
            "-test" => {
                let value = match iter.next() {
                    Some(value) => value,
                    None => {
                        eprintln!("{}: -test requires a variable count", program);
                        process::exit(1);
                    }
                };
                match value.parse::<usize>() {
                    Ok(n) if (1..=SELF_TEST_LIMIT).contains(&n) => test_vars = Some(n),
                    Ok(n) if n > SELF_TEST_LIMIT => {
                        eprintln!(
                            "{}: -test is limited to {} variables",
                            program, SELF_TEST_LIMIT
                        );
                        process::exit(1);
                    }
                    _ => {
                        eprintln!("{}: -test expects a positive integer", program);
                        process::exit(1);
                    }
                }
            }
            _ if arg.starts_with('-') => {
                eprintln!("{}: unknown option {}", program, arg);
                print_usage(program);
                process::exit(1);
            }
            _ => {
                if input_file.is_some() {
                    eprintln!("{}: more than one input file given", program);
                    process::exit(1);
                }
                input_file = Some(arg.clone());
            }
        }
    }

    let report = match (test_vars, input_file) {
        (Some(_), Some(_)) | (None, None) => {
            eprintln!(
                "{}: give either a CNF file or -test N, and not both",
                program
            );
            print_usage(program);
            process::exit(1);
        }
        (Some(n), None) => run_self_test(n),
        (None, Some(path)) => run_file(&path),
    };

    print!("{}", report.output());
}
