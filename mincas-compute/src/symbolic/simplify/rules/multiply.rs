//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{simplify_inner, step::{Step, StepCollector}},
    SymExpr,
};

/// `0*a = 0`
/// `a*0 = 0`
/// `1*a = a`
/// `a*1 = a`
/// `(a/b)*(c/d) = (a*c)/(b*d)`
/// `(a/b)*c = (a*c)/b`
/// `a*(c/d) = (a*c)/d`
/// `x*x = x^2`
pub fn multiply(lhs: SymExpr, rhs: SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    if lhs.is_zero() || rhs.is_zero() {
        step_collector.push(Step::MultiplyZero);
        return SymExpr::constant(0.0);
    }

    if lhs.is_one() {
        step_collector.push(Step::MultiplyOne);
        return rhs;
    }

    if rhs.is_one() {
        step_collector.push(Step::MultiplyOne);
        return lhs;
    }

    match (lhs, rhs) {
        (SymExpr::Divide(a, b), SymExpr::Divide(c, d)) => {
            step_collector.push(Step::MultiplyFractions);
            let numerator = simplify_inner(&SymExpr::Multiply(a, c), step_collector);
            let denominator = simplify_inner(&SymExpr::Multiply(b, d), step_collector);
            simplify_inner(&(numerator / denominator), step_collector)
        },
        (SymExpr::Divide(a, b), c) => {
            step_collector.push(Step::MultiplyFractionLeft);
            let numerator = simplify_inner(&(*a * c), step_collector);
            simplify_inner(&SymExpr::Divide(Box::new(numerator), b), step_collector)
        },
        (a, SymExpr::Divide(c, d)) => {
            step_collector.push(Step::MultiplyFractionRight);
            let numerator = simplify_inner(&(a * *c), step_collector);
            simplify_inner(&SymExpr::Divide(Box::new(numerator), d), step_collector)
        },
        (SymExpr::Variable(lhs), SymExpr::Variable(rhs)) if lhs == rhs => {
            step_collector.push(Step::SquareVariable);
            SymExpr::Variable(lhs).pow(2.0)
        },
        (lhs, rhs) => SymExpr::Multiply(Box::new(lhs), Box::new(rhs)),
    }
}
