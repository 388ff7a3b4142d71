//! Output formatting in the DIMACS solver convention.
//!
//! Verdicts are reported as an `s` line, witnesses as a zero-terminated
//! `v` line, and everything informational as `c` lines. The formatter
//! accumulates into a string so the exact output stays testable.

use std::fmt::Write;

use crate::search::driver::{SearchStats, Verdict};

/// Builds the solver's textual report line by line.
pub struct ReportFormatter {
    output: String,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { output: String::new() }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }

    /// An informational line, prefixed `c `.
    pub fn write_comment(&mut self, text: &str) {
        if text.is_empty() {
            writeln!(&mut self.output, "c").unwrap();
        } else {
            writeln!(&mut self.output, "c {}", text).unwrap();
        }
    }

    /// The `s` line, and for a satisfiable verdict the `v` line carrying
    /// the witness.
    pub fn write_verdict(&mut self, verdict: &Verdict) {
        match verdict {
            Verdict::Satisfiable(model) => {
                writeln!(&mut self.output, "s SATISFIABLE").unwrap();
                if model.is_empty() {
                    writeln!(&mut self.output, "v 0").unwrap();
                } else {
                    writeln!(&mut self.output, "v {} 0", model).unwrap();
                }
            }
            Verdict::Unsatisfiable => {
                writeln!(&mut self.output, "s UNSATISFIABLE").unwrap();
            }
        }
    }

    /// One `c` line per search counter.
    pub fn write_stats(&mut self, stats: &SearchStats) {
        self.write_comment(&format!("sequents examined   {}", stats.sequents_examined));
        self.write_comment(&format!("propagation steps   {}", stats.propagation_steps));
        self.write_comment(&format!("axioms detected     {}", stats.axioms_detected));
        self.write_comment(&format!("cuts applied        {}", stats.cuts_applied));
        self.write_comment(&format!("peak stack depth    {}", stats.peak_stack_depth));
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
