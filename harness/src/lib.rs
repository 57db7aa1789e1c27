//! Example-table harness for the exercise functions.
//!
//! Validates pure functions against fixed tables of input/expected pairs.
//! The architecture enforces a strict dependency order:
//!
//! - **[`case`] / [`run`] / [`report`]**: generic table machinery. Pure and
//!   deterministic; the only side effect anywhere is the log line per case.
//! - **[`suites`]**: built-in tables binding the machinery to the
//!   `exercises` functions. The functions under test never call back into
//!   the harness.
//! - **[`cli`]**: command implementations rendering reports as text or
//!   JSON.
//!
//! A mismatch is reported, never fatal: every case in a table executes
//! regardless of earlier failures.

pub mod case;
pub mod cli;
pub mod exit_codes;
pub mod logging;
pub mod report;
pub mod run;
pub mod suites;
