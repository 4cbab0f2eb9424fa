//! Compile-fail tests to ensure proper error messages for incorrect usage.
//!
//! These tests verify that the derive macro produces helpful compiler errors
//! when used incorrectly, such as:
//! - unknown or conflicting `#[inspect]` options
//! - `rename` on a variant that carries data
//! - deriving on a union
//!
//! Missing `Inspect` or `Display` impls are rejected by the type checker, and
//! those cases live as `compile_fail` doc tests on the `Inspect` trait.

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
