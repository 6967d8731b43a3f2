//! The identity catalogue applied by [`simplify`](super::simplify).
//!
//! Each function in this module receives the **already simplified** operands of one node and
//! returns the rewritten node. Some rules build a new tree and simplify it again (fraction
//! rearrangement, for example); none of them loop.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;

use crate::symbolic::SymExpr;
use super::{simplify_inner, step::{Step, StepCollector}};

/// Simplifies the operands of `expr`, then applies the rule for its variant.
pub(crate) fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut simplify = |expr: &SymExpr| simplify_inner(expr, step_collector);

    match expr {
        SymExpr::Constant(_) | SymExpr::Variable(_) => expr.clone(),
        SymExpr::Plus(lhs, rhs) => {
            let (lhs, rhs) = (simplify(lhs), simplify(rhs));
            add::plus(lhs, rhs, step_collector)
        },
        SymExpr::Minus(lhs, rhs) => {
            let (lhs, rhs) = (simplify(lhs), simplify(rhs));
            add::minus(expr, lhs, rhs, step_collector)
        },
        SymExpr::Multiply(lhs, rhs) => {
            let (lhs, rhs) = (simplify(lhs), simplify(rhs));
            multiply::multiply(lhs, rhs, step_collector)
        },
        SymExpr::Divide(lhs, rhs) => {
            let (lhs, rhs) = (simplify(lhs), simplify(rhs));
            divide::divide(expr, lhs, rhs, step_collector)
        },
        SymExpr::Sin(inner) => simplify(inner).sin(),
        SymExpr::Cos(inner) => simplify(inner).cos(),
        SymExpr::Ln(inner) => simplify(inner).ln(),
        SymExpr::Pow(base, exp) => {
            let (base, exp) = (simplify(base), simplify(exp));
            power::power(base, exp, step_collector)
        },
    }
}
