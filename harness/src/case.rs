//! Example-table definitions.
//!
//! A table pairs a function name with an ordered list of input/expected
//! cases. Tables are defined in code, so a malformed case fails the build
//! instead of being skipped at run time.

use std::fmt::Display;

/// One input/expected pair in an example table.
///
/// Expected values must come from the function's written contract, never
/// from running the implementation under test.
#[derive(Debug, Clone)]
pub struct Case<I, O> {
    pub input: I,
    pub expected: O,
    /// Short description of what the case exercises.
    pub label: Option<&'static str>,
}

impl<I, O> Case<I, O> {
    pub fn new(input: I, expected: O) -> Self {
        Self {
            input,
            expected,
            label: None,
        }
    }

    pub fn labeled(input: I, expected: O, label: &'static str) -> Self {
        Self {
            input,
            expected,
            label: Some(label),
        }
    }
}

/// An ordered example table for a single function under test.
#[derive(Debug, Clone)]
pub struct Table<I, O> {
    /// Function name used verbatim when reporting mismatches.
    pub function: &'static str,
    pub cases: Vec<Case<I, O>>,
}

/// Inputs that render as a comma-separated argument list for reporting.
pub trait Arguments {
    fn render(&self) -> String;
}

macro_rules! impl_arguments_scalar {
    ($($ty:ty),+) => {$(
        impl Arguments for $ty {
            fn render(&self) -> String {
                self.to_string()
            }
        }
    )+};
}

impl_arguments_scalar!(i32, u32, u64, f64, bool);

macro_rules! impl_arguments_tuple {
    ($($name:ident: $idx:tt),+) => {
        impl<$($name: Display),+> Arguments for ($($name,)+) {
            fn render(&self) -> String {
                [$(self.$idx.to_string()),+].join(", ")
            }
        }
    };
}

impl_arguments_tuple!(A: 0);
impl_arguments_tuple!(A: 0, B: 1);
impl_arguments_tuple!(A: 0, B: 1, C: 2);
