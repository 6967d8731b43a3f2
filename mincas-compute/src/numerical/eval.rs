use crate::symbolic::SymExpr;
use super::{ctxt::Ctxt, error::UnboundVariable};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, UnboundVariable>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, UnboundVariable> {
        self.eval(&Ctxt::new())
    }
}

impl Eval for SymExpr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, UnboundVariable> {
        evaluate(self, ctxt)
    }
}

/// Evaluates the expression with the given variable bindings.
///
/// Returns [`Err`] with the first (leftmost) variable that has no binding in `ctxt`. Evaluation
/// stops at that point; no partial result is produced.
pub fn evaluate(expr: &SymExpr, ctxt: &Ctxt) -> Result<f64, UnboundVariable> {
    use SymExpr::*;

    Ok(match expr {
        Constant(value) => *value,
        Variable(name) => ctxt.get_var(name).ok_or_else(|| UnboundVariable {
            name: name.clone(),
            suggestions: ctxt.get_similar_vars(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })?,
        Plus(lhs, rhs) => evaluate(lhs, ctxt)? + evaluate(rhs, ctxt)?,
        Minus(lhs, rhs) => evaluate(lhs, ctxt)? - evaluate(rhs, ctxt)?,
        Multiply(lhs, rhs) => evaluate(lhs, ctxt)? * evaluate(rhs, ctxt)?,
        Divide(lhs, rhs) => evaluate(lhs, ctxt)? / evaluate(rhs, ctxt)?,
        Sin(expr) => evaluate(expr, ctxt)?.sin(),
        Cos(expr) => evaluate(expr, ctxt)?.cos(),
        Ln(expr) => evaluate(expr, ctxt)?.ln(),
        Pow(base, exp) => evaluate(base, ctxt)?.powf(evaluate(exp, ctxt)?),
    })
}

/// Evaluates the expression if it contains no variables.
///
/// This is the constant-folding probe used by the simplifier: a tree that references any variable
/// returns [`None`] instead of an error.
pub fn try_eval_constant(expr: &SymExpr) -> Option<f64> {
    evaluate(expr, &Ctxt::new()).ok()
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use super::*;

    fn c(value: f64) -> SymExpr {
        SymExpr::constant(value)
    }

    fn x() -> SymExpr {
        SymExpr::var("x")
    }

    #[test]
    fn plus_with_binding() {
        let expr = (c(5.0) + x()) + c(3.0);
        let ctxt = Ctxt::new().with_var("x", 2.5);
        assert_eq!(expr.eval(&ctxt), Ok(10.5));
    }

    #[test]
    fn bindings_from_map() {
        let vars = HashMap::from([("x".to_string(), 2.0), ("y".to_string(), 3.0)]);
        let ctxt = Ctxt::from(vars);
        let expr = x() * SymExpr::var("y") - c(1.0);
        assert_eq!(evaluate(&expr, &ctxt), Ok(5.0));
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::new().with_var("x", 4.0);
        assert_eq!(evaluate(&(x() - c(1.0)), &ctxt), Ok(3.0));
        assert_eq!(evaluate(&(x() * c(0.5)), &ctxt), Ok(2.0));
        assert_eq!(evaluate(&(c(1.0) / x()), &ctxt), Ok(0.25));
        assert_eq!(evaluate(&x().pow(2.0), &ctxt), Ok(16.0));
    }

    #[test]
    fn transcendental() {
        let ctxt = Ctxt::new().with_var("x", std::f64::consts::FRAC_PI_2);
        assert_float_relative_eq!(x().sin().eval(&ctxt).unwrap(), 1.0);
        assert_float_relative_eq!(c(std::f64::consts::E).ln().eval_default().unwrap(), 1.0);
        assert!(x().cos().eval(&ctxt).unwrap().abs() < 1e-15);
    }

    #[test]
    fn float_semantics_are_not_errors() {
        assert_eq!((c(1.0) / c(0.0)).eval_default(), Ok(f64::INFINITY));
        assert!((c(0.0) / c(0.0)).eval_default().unwrap().is_nan());
        assert_eq!(c(0.0).ln().eval_default(), Ok(f64::NEG_INFINITY));
        assert!(c(-1.0).ln().eval_default().unwrap().is_nan());
        assert!(c(-8.0).pow(1.0 / 3.0).eval_default().unwrap().is_nan());
    }

    #[test]
    fn unbound_variable() {
        let expr = (c(5.0) + x()) + SymExpr::var("y");
        let ctxt = Ctxt::new().with_var("y", 1.0);
        assert_eq!(expr.eval(&ctxt), Err(UnboundVariable {
            name: "x".to_string(),
            suggestions: vec!["y".to_string()],
        }));
    }

    #[test]
    fn leftmost_unbound_variable_is_reported() {
        let expr = SymExpr::var("a") * SymExpr::var("b");
        assert_eq!(expr.eval_default(), Err(UnboundVariable::new("a")));
    }

    #[test]
    fn constant_probe() {
        assert_eq!(try_eval_constant(&(c(2.0) * c(3.0))), Some(6.0));
        assert_eq!(try_eval_constant(&(c(2.0) * x())), None);
    }
}
