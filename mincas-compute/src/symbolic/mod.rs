//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions are trees of [`SymExpr`] nodes, built with the constructor methods and the
//! arithmetic operators. Building a tree never simplifies it.
//!
//! ```
//! use mincas_compute::symbolic::SymExpr;
//!
//! let x = SymExpr::var("x");
//! let expr = x.clone() * 5.0 + 7.0;
//! assert_eq!(expr.to_string(), "x * 5 + 7");
//! ```
//!
//! # Differentiation and simplification
//!
//! [`derivative`] differentiates a tree with respect to one variable and returns the simplified
//! result. [`simplify`] can also be used on its own; [`simplify_with_steps`] additionally reports
//! which identities were applied.
//!
//! ```
//! use mincas_compute::symbolic::{derivative, SymExpr};
//!
//! let x = SymExpr::var("x");
//! let expr = x * 5.0 + 7.0;
//! assert_eq!(derivative(&expr, "x"), SymExpr::constant(5.0));
//! ```
//!
//! For more information, see the [`mod@simplify`] and [`mod@derivative`] modules.

pub mod derivative;
pub mod expr;
pub mod simplify;

pub use derivative::{derivative, differentiate};
pub use expr::{strictly_eq, SymExpr};
pub use simplify::{simplify, simplify_with_steps, step::{Step, StepCollector}};
