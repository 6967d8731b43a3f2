//! Simplification rules for division.

use crate::symbolic::{
    simplify::{cancel::cancel_factor, simplify_inner, step::{Step, StepCollector}},
    SymExpr,
};

/// `0/a = 0`
/// `a/1 = a`
/// `(a/b)/(c/d) = (a*d)/(b*c)`
/// `(a/b)/c = a/(b*c)`
/// `a/(c/d) = (a*d)/c`
/// `(x*a)/x = a` (see [`cancel_factor`])
/// `a/a = 1`
///
/// When the denominator is a variable that cannot be cancelled out of the numerator, the original
/// `expr` is returned.
pub fn divide(
    expr: &SymExpr,
    lhs: SymExpr,
    rhs: SymExpr,
    step_collector: &mut dyn StepCollector<Step>,
) -> SymExpr {
    if lhs.is_zero() {
        step_collector.push(Step::DivideZero);
        return SymExpr::constant(0.0);
    }

    if rhs.is_one() {
        step_collector.push(Step::DivideOne);
        return lhs;
    }

    match (lhs, rhs) {
        (SymExpr::Divide(a, b), SymExpr::Divide(c, d)) => {
            step_collector.push(Step::DivideFractions);
            let numerator = simplify_inner(&SymExpr::Multiply(a, d), step_collector);
            let denominator = simplify_inner(&SymExpr::Multiply(b, c), step_collector);
            simplify_inner(&(numerator / denominator), step_collector)
        },
        (SymExpr::Divide(a, b), c) => {
            step_collector.push(Step::DivideFractionNumerator);
            let denominator = simplify_inner(&(*b * c), step_collector);
            simplify_inner(&SymExpr::Divide(a, Box::new(denominator)), step_collector)
        },
        (a, SymExpr::Divide(c, d)) => {
            step_collector.push(Step::DivideFractionDenominator);
            let numerator = simplify_inner(&SymExpr::Multiply(Box::new(a), d), step_collector);
            simplify_inner(&SymExpr::Divide(Box::new(numerator), c), step_collector)
        },
        (lhs, SymExpr::Variable(var)) => match cancel_factor(&lhs, &var, step_collector) {
            Some(reduced) => {
                step_collector.push(Step::CancelVariable);
                reduced
            },
            None => expr.clone(),
        },
        (lhs, rhs) if lhs == rhs => {
            step_collector.push(Step::DivideSelf);
            SymExpr::constant(1.0)
        },
        (lhs, rhs) => SymExpr::Divide(Box::new(lhs), Box::new(rhs)),
    }
}
