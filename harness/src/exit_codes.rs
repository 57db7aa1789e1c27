//! Stable exit codes for harness CLI commands.

/// Every case in every selected suite matched its expected value.
pub const OK: i32 = 0;
/// At least one case mismatched.
pub const MISMATCH: i32 = 1;
/// Invalid invocation: unknown suite id or other errors.
pub const INVALID: i32 = 2;
