//! Simplification rules for addition and subtraction.

use crate::symbolic::{
    simplify::{simplify_inner, step::{Step, StepCollector}},
    SymExpr,
};

/// `a+0 = a`
/// `0+a = a`
pub fn plus(lhs: SymExpr, rhs: SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    if rhs.is_zero() {
        step_collector.push(Step::AddZero);
        lhs
    } else if lhs.is_zero() {
        step_collector.push(Step::AddZero);
        rhs
    } else {
        SymExpr::Plus(Box::new(lhs), Box::new(rhs))
    }
}

/// `a-0 = a`
/// `0-a = -1*a`
///
/// Any other difference is returned as the original, unsimplified `expr`; its operands are only
/// simplified to check for zero.
pub fn minus(
    expr: &SymExpr,
    lhs: SymExpr,
    rhs: SymExpr,
    step_collector: &mut dyn StepCollector<Step>,
) -> SymExpr {
    if rhs.is_zero() {
        step_collector.push(Step::SubtractZero);
        lhs
    } else if lhs.is_zero() {
        step_collector.push(Step::SubtractFromZero);
        // `-1*a` can still match a multiplication rule, e.g. when `a` is a fraction
        simplify_inner(&(SymExpr::constant(-1.0) * rhs), step_collector)
    } else {
        expr.clone()
    }
}
