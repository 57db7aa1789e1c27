//! Example-table execution.
//!
//! Drives every case in a table through the function under test and
//! records one outcome per case. A mismatch never stops the run; later
//! cases still execute. Functions are pure, so there are no retries, and
//! a panic inside the function under test propagates to the caller.

use std::fmt::Display;

use tracing::debug;

use crate::case::{Arguments, Table};
use crate::report::CaseOutcome;

/// Run all cases of a table against `function`, in table order.
///
/// Outputs are compared with exact equality. For floating-point tables
/// this is deliberate: cases must use exact side values.
pub fn run_table<I, O, F>(table: &Table<I, O>, function: F) -> Vec<CaseOutcome>
where
    I: Arguments,
    O: Display + PartialEq,
    F: Fn(&I) -> O,
{
    let mut outcomes = Vec::with_capacity(table.cases.len());
    for case in &table.cases {
        let actual = function(&case.input);
        let passed = actual == case.expected;
        let arguments = case.input.render();
        debug!(
            function = table.function,
            arguments = %arguments,
            passed,
            "case result"
        );
        outcomes.push(CaseOutcome {
            function: table.function.to_string(),
            arguments,
            expected: case.expected.to_string(),
            actual: actual.to_string(),
            label: case.label.map(str::to_string),
            passed,
        });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Case;

    fn broken_double(n: &i32) -> i32 {
        // wrong on purpose for odd inputs
        if n % 2 == 0 { n * 2 } else { n * 3 }
    }

    #[test]
    fn records_one_outcome_per_case_in_order() {
        let table = Table {
            function: "double",
            cases: vec![
                Case::new(2, 4),
                Case::new(3, 6),
                Case::new(4, 8),
                Case::new(5, 10),
            ],
        };
        let outcomes = run_table(&table, broken_double);

        assert_eq!(outcomes.len(), 4);
        let passed: Vec<bool> = outcomes.iter().map(|outcome| outcome.passed).collect();
        assert_eq!(passed, vec![true, false, true, false]);
    }

    #[test]
    fn mismatch_captures_expected_and_actual() {
        let table = Table {
            function: "double",
            cases: vec![Case::labeled(3, 6, "odd input")],
        };
        let outcomes = run_table(&table, broken_double);

        assert_eq!(outcomes[0].expected, "6");
        assert_eq!(outcomes[0].actual, "9");
        assert_eq!(outcomes[0].arguments, "3");
        assert_eq!(outcomes[0].label.as_deref(), Some("odd input"));
        assert_eq!(
            outcomes[0].mismatch_line(),
            "Expected 6 when calling double(3), got 9"
        );
    }

    #[test]
    fn empty_table_yields_no_outcomes() {
        let table: Table<i32, i32> = Table {
            function: "double",
            cases: Vec::new(),
        };
        assert!(run_table(&table, broken_double).is_empty());
    }
}
