use super::SymExpr;

/// Compares two constants. Values are compared bit-for-bit, so `-0.0` and `0.0` are **different**
/// constants, except that all `NaN`s are equal to each other.
fn constants_eq(lhs: f64, rhs: f64) -> bool {
    lhs.to_bits() == rhs.to_bits() || (lhs.is_nan() && rhs.is_nan())
}

/// Checks if two expressions are **strictly** equal.
///
/// Two expressions are strictly equal if they are the same variant and:
///
/// - If both are [`SymExpr::Constant`], both values are equal (see [`constants_eq`]).
/// - If both are [`SymExpr::Variable`], both names are equal.
/// - If both are [`SymExpr::Plus`] or [`SymExpr::Multiply`], the operands are strictly equal
/// either in the given order or swapped.
/// - Otherwise, the operands are strictly equal in the given order.
///
/// Swapping is only tried at the top level of each comparison. The operands themselves are
/// compared with this same function, so `(a + b) * c` equals `c * (b + a)`, but `(a + b) + c`
/// does not equal `a + (b + c)`.
///
/// For more information about strict equality, see the [module-level documentation](super).
pub fn strictly_eq(lhs: &SymExpr, rhs: &SymExpr) -> bool {
    use SymExpr::*;

    match (lhs, rhs) {
        (Constant(lhs), Constant(rhs)) => constants_eq(*lhs, *rhs),
        (Variable(lhs), Variable(rhs)) => lhs == rhs,
        (Plus(a, b), Plus(c, d)) | (Multiply(a, b), Multiply(c, d)) => {
            (strictly_eq(a, c) && strictly_eq(b, d))
                || (strictly_eq(a, d) && strictly_eq(b, c))
        },
        (Minus(a, b), Minus(c, d))
            | (Divide(a, b), Divide(c, d))
            | (Pow(a, b), Pow(c, d)) => strictly_eq(a, c) && strictly_eq(b, d),
        (Sin(a), Sin(b)) | (Cos(a), Cos(b)) | (Ln(a), Ln(b)) => strictly_eq(a, b),
        _ => false,
    }
}

/// Implements **strict** equality. See [`strictly_eq`].
impl PartialEq for SymExpr {
    fn eq(&self, other: &Self) -> bool {
        strictly_eq(self, other)
    }
}

impl Eq for SymExpr {}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(value: f64) -> SymExpr {
        SymExpr::constant(value)
    }

    fn x() -> SymExpr {
        SymExpr::var("x")
    }

    fn y() -> SymExpr {
        SymExpr::var("y")
    }

    #[test]
    fn plus_is_commutative() {
        assert_eq!(c(1.0) + c(2.0), c(2.0) + c(1.0));
        assert_eq!(x() + y(), y() + x());
    }

    #[test]
    fn multiply_is_commutative() {
        assert_eq!(x() * c(5.0), c(5.0) * x());
    }

    #[test]
    fn minus_and_divide_are_ordered() {
        assert_ne!(c(1.0) - c(2.0), c(2.0) - c(1.0));
        assert_ne!(x() / y(), y() / x());
        assert_ne!(x().pow(y()), y().pow(x()));
    }

    #[test]
    fn commutativity_is_one_level() {
        // operands are compared recursively, so swaps nested inside still match
        assert_eq!((x() + y()) * c(2.0), c(2.0) * (y() + x()));

        // but there is no reassociation
        assert_ne!((x() + y()) + c(1.0), x() + (y() + c(1.0)));
        assert_ne!((x() * y()) * c(1.0), x() * (y() * c(1.0)));
    }

    #[test]
    fn different_variants() {
        assert_ne!(x() + y(), x() * y());
        assert_ne!(x().sin(), x().cos());
        assert_ne!(x().ln(), x());
        assert_ne!(c(1.0), x());
    }

    #[test]
    fn signed_zero_is_distinct() {
        assert_ne!(c(0.0), c(-0.0));
        assert_eq!(c(-0.0), c(-0.0));
    }

    #[test]
    fn nan_equals_nan() {
        assert_eq!(c(f64::NAN), c(f64::NAN));
        assert_ne!(c(f64::NAN), c(f64::INFINITY));
    }

    #[test]
    fn unary_recursion() {
        assert_eq!((x() + y()).sin(), (y() + x()).sin());
        assert_ne!((x() - y()).ln(), (y() - x()).ln());
    }
}
