//! Simplification rules for exponentiation.

use crate::symbolic::{simplify::step::{Step, StepCollector}, SymExpr};

/// `0^a = 0` (including `0^0`)
/// `a^0 = 1`
/// `1^a = 1`
/// `a^1 = a`
pub fn power(base: SymExpr, exp: SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    if base.is_zero() {
        step_collector.push(Step::PowerZeroLeft);
        SymExpr::constant(0.0)
    } else if exp.is_zero() {
        step_collector.push(Step::PowerZero);
        SymExpr::constant(1.0)
    } else if base.is_one() {
        step_collector.push(Step::PowerOneLeft);
        SymExpr::constant(1.0)
    } else if exp.is_one() {
        step_collector.push(Step::PowerOne);
        base
    } else {
        base.pow(exp)
    }
}
