//! Pure exercise functions validated by the example-table harness.
//!
//! Every function here is deterministic, side-effect free, and performs no
//! input validation: callers are responsible for sane inputs, and nonsense
//! inputs produce a well-defined but meaningless answer. All I/O and
//! reporting lives in the `harness` crate, which drives these functions
//! against fixed tables of input/expected pairs.

pub mod octal;
pub mod temperature;
pub mod triangle;
