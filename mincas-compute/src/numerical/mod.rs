//! Numerical evaluation of expressions.
//!
//! An expression is evaluated against a [`Ctxt`](ctxt::Ctxt), which binds variable names to
//! numbers. All arithmetic follows IEEE 754 `f64` semantics: dividing by zero, taking the
//! logarithm of a non-positive number, or raising a negative number to a non-integer power yields
//! an infinite or `NaN` result, **not** an error. The only way evaluation can fail is an
//! [`UnboundVariable`](error::UnboundVariable).

pub mod ctxt;
pub mod error;
pub mod eval;
