//! Derivatives of the unary functions, with the chain rule applied.

use crate::symbolic::SymExpr;
use super::raw_derivative;

/// `sin(f)' = f' * cos(f)`
pub(super) fn sin(arg: &SymExpr, with: &str) -> SymExpr {
    raw_derivative(arg, with) * arg.clone().cos()
}

/// `cos(f)' = -1 * (f' * sin(f))`
pub(super) fn cos(arg: &SymExpr, with: &str) -> SymExpr {
    SymExpr::constant(-1.0) * (raw_derivative(arg, with) * arg.clone().sin())
}

/// `ln(f)' = f' / f`
pub(super) fn ln(arg: &SymExpr, with: &str) -> SymExpr {
    raw_derivative(arg, with) / arg.clone()
}
