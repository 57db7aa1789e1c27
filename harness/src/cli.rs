//! CLI command implementations.

use anyhow::{Context, Result, bail};
use chrono::Utc;
use tracing::{debug, info};

use crate::report::RunReport;
use crate::suites::{Suite, builtin_suites, find_suite};

/// List all built-in suites.
pub fn list_suites() -> Result<()> {
    for suite in builtin_suites() {
        println!("{}", suite.id);
    }
    Ok(())
}

/// Run the named suites, or every built-in suite when none are named.
///
/// Text mode prints one mismatch line per failing case, in case order,
/// followed by `report:` summary lines. With `json` the full structured
/// report goes to stdout instead. Returns the report so the caller can
/// decide the exit code.
pub fn run_suites(suite_ids: &[String], json: bool) -> Result<RunReport> {
    let suites = builtin_suites();
    let selected: Vec<&Suite> = if suite_ids.is_empty() {
        suites.iter().collect()
    } else {
        let mut selected = Vec::with_capacity(suite_ids.len());
        for id in suite_ids {
            match find_suite(&suites, id) {
                Some(suite) => selected.push(suite),
                None => bail!("suite {} not found (try `harness list`)", id),
            }
        }
        selected
    };

    info!(suites = selected.len(), "starting run");
    let started_at = Utc::now();
    let mut reports = Vec::with_capacity(selected.len());
    for suite in selected {
        debug!(suite_id = suite.id, "running suite");
        let report = suite.run();
        debug!(
            suite_id = suite.id,
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        reports.push(report);
    }
    let finished_at = Utc::now();

    let run = RunReport {
        started_at: started_at.to_rfc3339(),
        duration_secs: (finished_at - started_at).num_milliseconds() as f64 / 1000.0,
        suites: reports,
    };
    info!(
        cases = run.total(),
        failed = run.failed(),
        "run finished"
    );

    if json {
        let contents = serde_json::to_string_pretty(&run).context("serialize report")?;
        println!("{contents}");
    } else {
        for suite in &run.suites {
            for mismatch in suite.mismatches() {
                println!("{}", mismatch.mismatch_line());
            }
        }
        println!(
            "report: suites={} cases={} passed={} failed={}",
            run.suites.len(),
            run.total(),
            run.passed(),
            run.failed()
        );
    }

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_every_builtin_suite_by_default() {
        let run = run_suites(&[], false).expect("run");
        assert_eq!(run.suites.len(), builtin_suites().len());
        assert!(run.all_passed());
    }

    #[test]
    fn runs_only_named_suites_in_request_order() {
        let ids = vec!["is-triangle".to_string(), "decimal-to-octal".to_string()];
        let run = run_suites(&ids, false).expect("run");
        let suite_ids: Vec<&str> = run
            .suites
            .iter()
            .map(|suite| suite.suite_id.as_str())
            .collect();
        assert_eq!(suite_ids, vec!["is-triangle", "decimal-to-octal"]);
    }

    #[test]
    fn unknown_suite_is_an_error() {
        let ids = vec!["no-such-suite".to_string()];
        let err = run_suites(&ids, false).expect_err("unknown suite");
        assert!(err.to_string().contains("no-such-suite"));
    }
}
