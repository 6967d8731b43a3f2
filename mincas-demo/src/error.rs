use mincas_compute::{numerical::error::UnboundVariable, symbolic::SymExpr};
use mincas_error::Error as ReportError;

/// Utility enum to package errors that can occur while running the demonstration.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while evaluating.
    EvalError(UnboundVariable),
}

impl Error {
    /// Report this error to stderr, pointing at the variables of the expression that caused it.
    pub fn report_to_stderr(self, expr: &SymExpr) {
        let rendered = expr.render();
        let report = match self {
            Self::EvalError(err) => ReportError::new(rendered.spans_of(&err.name), err),
        };

        if let Err(err) = report.report_to_stderr("expr", &rendered.text) {
            eprintln!("failed to write error report: {}", err);
        }
    }
}

impl From<UnboundVariable> for Error {
    fn from(err: UnboundVariable) -> Self {
        Self::EvalError(err)
    }
}
