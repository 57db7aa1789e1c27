//! Built-in example tables for the exercise functions.
//!
//! Expected values are taken from each function's written contract, not
//! from running the implementation under test, so a wrong implementation
//! shows up as mismatch lines rather than a silently self-consistent run.

use exercises::octal::{binary_to_octal, decimal_to_octal};
use exercises::temperature::fahrenheit_to_celsius;
use exercises::triangle::{is_isoceles, is_triangle};

use crate::case::{Case, Table};
use crate::report::{CaseOutcome, SuiteReport};
use crate::run::run_table;

/// A named example table bound to its function under test.
pub struct Suite {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: &'static str,
    cases: fn() -> Vec<CaseOutcome>,
}

impl Suite {
    /// Execute the suite's table and collect its outcomes.
    pub fn run(&self) -> SuiteReport {
        SuiteReport {
            suite_id: self.id.to_string(),
            cases: (self.cases)(),
        }
    }
}

/// All built-in suites, sorted by id. Ids are unique.
pub fn builtin_suites() -> Vec<Suite> {
    vec![
        Suite {
            id: "binary-to-octal",
            cases: run_binary_to_octal,
        },
        Suite {
            id: "decimal-to-octal",
            cases: run_decimal_to_octal,
        },
        Suite {
            id: "fahrenheit-to-celsius",
            cases: run_fahrenheit_to_celsius,
        },
        Suite {
            id: "is-isoceles",
            cases: run_is_isoceles,
        },
        Suite {
            id: "is-triangle",
            cases: run_is_triangle,
        },
    ]
}

/// Find a suite by id.
pub fn find_suite<'a>(suites: &'a [Suite], id: &str) -> Option<&'a Suite> {
    suites.iter().find(|suite| suite.id == id)
}

fn run_is_triangle() -> Vec<CaseOutcome> {
    let table = Table {
        function: "is_triangle",
        cases: vec![
            Case::labeled((3.0, 7.0, 10.0), false, "a + b == c"),
            Case::labeled((3.9, 6.0, 10.0), false, "a + b < c"),
            Case::labeled((3.0, 6.0, 3.0), false, "a + c == b"),
            Case::labeled((3.0, 6.0, 2.9), false, "a + c < b"),
            Case::labeled((40.0, 20.0, 20.0), false, "b + c == a"),
            Case::labeled((40.0, 19.9, 20.0), false, "b + c < a"),
            Case::labeled((1.0, 1.0, 1.0), true, "all sides equal"),
            Case::labeled((1.001, 2.0, 3.0), true, "a + b slightly larger than c"),
            Case::labeled((2.0, 3.0, 1.001), true, "a + c slightly larger than b"),
            Case::labeled((3.0, 1.001, 2.0), true, "b + c slightly larger than a"),
        ],
    };
    run_table(&table, |&(a, b, c)| is_triangle(a, b, c))
}

fn run_is_isoceles() -> Vec<CaseOutcome> {
    let table = Table {
        function: "is_isoceles",
        cases: vec![
            Case::labeled((1.0, 2.0, 3.0), false, "not a triangle"),
            Case::labeled((5.0, 5.0, 10.0), false, "two equal sides but degenerate"),
            Case::labeled((3.0, 4.0, 5.0), false, "triangle, but not isoceles"),
            Case::labeled((2.0, 2.0, 3.0), true, "a == b"),
            Case::labeled((2.0, 3.0, 2.0), true, "a == c"),
            Case::labeled((3.0, 2.0, 2.0), true, "b == c"),
            Case::labeled((1.0, 1.0, 1.0), true, "equilateral counts as isoceles"),
        ],
    };
    run_table(&table, |&(a, b, c)| is_isoceles(a, b, c))
}

fn run_decimal_to_octal() -> Vec<CaseOutcome> {
    let table = Table {
        function: "decimal_to_octal",
        cases: vec![
            Case::labeled(0u32, 0u64, "zero"),
            Case::labeled(7, 7, "largest single octal digit"),
            Case::labeled(8, 10, "carries into second digit"),
            Case::labeled(64, 100, "carries into third digit"),
            Case::new(123, 173),
            Case::new(4095, 7777),
        ],
    };
    run_table(&table, |&decimal| decimal_to_octal(decimal))
}

fn run_binary_to_octal() -> Vec<CaseOutcome> {
    let table = Table {
        function: "binary_to_octal",
        cases: vec![
            Case::labeled(0u64, 0u64, "zero"),
            Case::new(1, 1),
            Case::new(101, 5),
            Case::new(11010, 32),
            Case::new(110111, 67),
        ],
    };
    run_table(&table, |&binary| binary_to_octal(binary))
}

fn run_fahrenheit_to_celsius() -> Vec<CaseOutcome> {
    let table = Table {
        function: "fahrenheit_to_celsius",
        cases: vec![
            Case::labeled(32, 0, "freezing point"),
            Case::labeled(212, 100, "boiling point"),
            Case::labeled(-40, -40, "scales cross"),
            Case::labeled(98, 36, "truncates toward zero"),
            Case::labeled(0, -17, "truncates toward zero when negative"),
            Case::new(50, 10),
        ],
    };
    run_table(&table, |&fahrenheit| fahrenheit_to_celsius(fahrenheit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suite_ids_are_sorted_and_unique() {
        let suites = builtin_suites();
        for pair in suites.windows(2) {
            assert!(pair[0].id < pair[1].id, "{} !< {}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn every_builtin_suite_passes_against_the_reference_functions() {
        for suite in builtin_suites() {
            let report = suite.run();
            let mismatches: Vec<String> = report
                .mismatches()
                .map(CaseOutcome::mismatch_line)
                .collect();
            assert!(
                report.all_passed(),
                "suite {} had mismatches:\n{}",
                report.suite_id,
                mismatches.join("\n")
            );
        }
    }

    #[test]
    fn find_suite_matches_exact_id() {
        let suites = builtin_suites();
        assert!(find_suite(&suites, "is-triangle").is_some());
        assert!(find_suite(&suites, "is_triangle").is_none());
        assert!(find_suite(&suites, "").is_none());
    }

    #[test]
    fn triangle_suite_preserves_table_order() {
        let report = find_suite(&builtin_suites(), "is-triangle")
            .expect("suite exists")
            .run();
        assert_eq!(report.total(), 10);
        assert_eq!(report.cases[0].arguments, "3, 7, 10");
        assert_eq!(report.cases[0].label.as_deref(), Some("a + b == c"));
        assert_eq!(report.cases[6].arguments, "1, 1, 1");
    }
}
