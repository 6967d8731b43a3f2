//! Symbolic differentiation.
//!
//! [`derivative`] builds the derivative of every node with the textbook rule for its variant, then
//! hands the whole tree to [`simplify`] once. The raw tree is never returned, since it is full of
//! `0 * a` and `1 * a` terms.
//!
//! Powers always use logarithmic differentiation:
//!
//! ```text
//! (f^g)' = f^g * (g' * ln(f) + g * (f' / f))
//! ```
//!
//! This works whether or not the exponent depends on the variable. For a constant exponent, the
//! familiar `n * x^(n-1)` comes out after simplification.
//!
//! ```
//! use mincas_compute::symbolic::{derivative, SymExpr};
//!
//! // d/dx x^2 = x*2
//! let x = SymExpr::var("x");
//! assert_eq!(derivative(&x.clone().pow(2.0), "x"), x * 2.0);
//! ```

mod function;

use super::{simplify, SymExpr};

/// Differentiates `f` with respect to `with` without simplifying the result.
fn raw_derivative(f: &SymExpr, with: &str) -> SymExpr {
    match f {
        SymExpr::Constant(_) => SymExpr::constant(0.0),
        SymExpr::Variable(name) => {
            if name == with {
                SymExpr::constant(1.0)
            } else {
                SymExpr::constant(0.0)
            }
        },
        SymExpr::Plus(lhs, rhs) => raw_derivative(lhs, with) + raw_derivative(rhs, with),
        SymExpr::Minus(lhs, rhs) => raw_derivative(lhs, with) - raw_derivative(rhs, with),

        // (f * g)' = f' * g + f * g'
        SymExpr::Multiply(lhs, rhs) => {
            raw_derivative(lhs, with) * (**rhs).clone()
                + (**lhs).clone() * raw_derivative(rhs, with)
        },

        // (f / g)' = (f' * g - f * g') / g^2
        SymExpr::Divide(lhs, rhs) => {
            let numerator = raw_derivative(lhs, with) * (**rhs).clone()
                - (**lhs).clone() * raw_derivative(rhs, with);
            numerator / (**rhs).clone().pow(2.0)
        },

        SymExpr::Sin(arg) => function::sin(arg, with),
        SymExpr::Cos(arg) => function::cos(arg, with),
        SymExpr::Ln(arg) => function::ln(arg, with),

        SymExpr::Pow(base, exp) => {
            let log_derivative = raw_derivative(exp, with) * (**base).clone().ln()
                + (**exp).clone() * function::ln(base, with);
            f.clone() * log_derivative
        },
    }
}

/// Computes the derivative of `f` with respect to the variable `with`. The result is simplified.
///
/// Every other variable is treated as a constant.
pub fn derivative(f: &SymExpr, with: &str) -> SymExpr {
    simplify(&raw_derivative(f, with))
}

/// Alias for [`derivative`].
pub fn differentiate(f: &SymExpr, with: &str) -> SymExpr {
    derivative(f, with)
}
