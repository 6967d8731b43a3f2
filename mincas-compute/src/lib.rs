//! A small symbolic algebra engine over real numbers.
//!
//! Expressions are built as [`symbolic::SymExpr`] trees, then evaluated with
//! [`numerical::eval::evaluate`], differentiated with [`symbolic::derivative`] or normalized with
//! [`symbolic::simplify`].

pub mod numerical;
pub mod symbolic;
