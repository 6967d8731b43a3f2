mod error;

use error::Error;
use mincas_compute::{
    numerical::{ctxt::Ctxt, eval::evaluate},
    symbolic::{derivative, SymExpr},
};

/// Evaluates the expression in the given context.
fn eval(expr: &SymExpr, ctxt: &Ctxt) -> Result<f64, Error> {
    Ok(evaluate(expr, ctxt)?)
}

fn main() {
    let expr = SymExpr::constant(0.0);
    let d = derivative(&expr, "x");

    println!("d/dx {} = {}", expr, d);
    println!("{:?}", d);

    match eval(&d, &Ctxt::new()) {
        Ok(value) => println!("{}", value),
        Err(err) => err.report_to_stderr(&d),
    }
}
