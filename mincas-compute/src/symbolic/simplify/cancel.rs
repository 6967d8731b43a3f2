//! Cancelling a variable out of a numerator.

use crate::symbolic::SymExpr;
use super::{simplify_inner, step::{Step, StepCollector}};

/// Tries to remove exactly one factor of the variable `var` from `expr`, returning [`None`] if
/// `expr` has no shape this function knows how to reduce.
///
/// - `x -> 1`
/// - `x^n -> x^(n-1)`
/// - `a*b ->` `a` with one `x` removed, otherwise `b` with one `x` removed, otherwise [`None`]
/// - `a+b ->` each side with one `x` removed **where possible**; a side that cannot be reduced is
/// kept as-is, so this never returns [`None`] for a sum
///
/// This is only used to simplify division by a bare variable, i.e. `expr / x`.
pub(crate) fn cancel_factor(
    expr: &SymExpr,
    var: &str,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<SymExpr> {
    match expr {
        SymExpr::Multiply(lhs, rhs) => {
            if let Some(reduced) = cancel_factor(lhs, var, step_collector) {
                let product = SymExpr::Multiply(Box::new(reduced), rhs.clone());
                Some(simplify_inner(&product, step_collector))
            } else {
                let reduced = cancel_factor(rhs, var, step_collector)?;
                let product = SymExpr::Multiply(lhs.clone(), Box::new(reduced));
                Some(simplify_inner(&product, step_collector))
            }
        },
        SymExpr::Plus(lhs, rhs) => {
            let lhs = cancel_factor(lhs, var, step_collector).unwrap_or_else(|| (**lhs).clone());
            let rhs = cancel_factor(rhs, var, step_collector).unwrap_or_else(|| (**rhs).clone());
            Some(simplify_inner(&(lhs + rhs), step_collector))
        },
        SymExpr::Variable(name) if name == var => Some(SymExpr::constant(1.0)),
        SymExpr::Pow(base, exp) if base.as_symbol() == Some(var) => {
            let exp = simplify_inner(&SymExpr::Minus(exp.clone(), Box::new(SymExpr::constant(1.0))), step_collector);
            Some(simplify_inner(&SymExpr::var(var).pow(exp), step_collector))
        },
        _ => None,
    }
}
