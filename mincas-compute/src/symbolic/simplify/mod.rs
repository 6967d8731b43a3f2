//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, a best-effort normalizer. It is **not** a full
//! computer algebra system, and it does not search for the simplest equivalent expression.
//! Instead, it makes a single bottom-up pass over the tree:
//!
//! 1. If the whole tree contains no variables, it is evaluated and replaced with a single
//!    [`SymExpr::Constant`].
//! 2. Otherwise, the operands of the node are simplified first, and then the fixed set of
//!    identities for the node's variant in [`rules`] is applied. If the result of that rule
//!    contains no variables, it is folded into a constant as in step 1.
//!
//! Some identities rearrange fractions into a new tree, which is then simplified again. There is
//! no outer loop that repeats the pass until nothing changes. Simplifying an already simplified
//! expression returns it unchanged.
//!
//! ```
//! use mincas_compute::symbolic::{simplify, SymExpr};
//!
//! // `x*5 + 0 = x*5`
//! let x = SymExpr::var("x");
//! let expr = x.clone() * 5.0 + 0.0;
//! assert_eq!(simplify(&expr), x * 5.0);
//! ```

mod cancel;
pub mod rules;
pub mod step;

use crate::numerical::eval::try_eval_constant;
use step::{Step, StepCollector};
use super::SymExpr;

/// Replaces a tree that contains no variables with its value.
fn fold_constant(expr: SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    if matches!(expr, SymExpr::Constant(_)) {
        return expr;
    }

    match try_eval_constant(&expr) {
        Some(value) => {
            step_collector.push(Step::ConstantFold);
            SymExpr::Constant(value)
        },
        None => expr,
    }
}

/// Base implementation of the simplification algorithm.
pub(crate) fn simplify_inner(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    // a variable in the tree makes the probe fail, which just means we fall through to the rules
    if let Some(value) = try_eval_constant(expr) {
        if !matches!(expr, SymExpr::Constant(_)) {
            step_collector.push(Step::ConstantFold);
        }
        return SymExpr::Constant(value);
    }

    let rewritten = rules::all(expr, step_collector);
    fold_constant(rewritten, step_collector)
}

/// Simplify the given expression.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    simplify_inner(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were taken. This is useful for debugging, and also for displaying
/// the steps taken to the user.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = simplify_inner(expr, &mut steps);
    (expr, steps)
}
