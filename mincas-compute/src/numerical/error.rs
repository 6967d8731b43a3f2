use ariadne::{Fmt, Label, Report, ReportKind};
use mincas_error::{ErrorKind, EXPR};
use std::{fmt, ops::Range};

/// A variable in the expression has no value in the evaluation context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundVariable {
    /// The name of the variable that was unbound.
    pub name: String,

    /// Names of bound variables that are similar to `name`, if any.
    pub suggestions: Vec<String>,
}

impl UnboundVariable {
    /// Creates the error with no suggestions.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), suggestions: Vec::new() }
    }

    /// The help text shown below the report.
    fn help(&self) -> String {
        match self.suggestions.as_slice() {
            [] => format!("bind it in the context with: ctxt.add_var(\"{}\", <value>)", (&self.name).fg(EXPR)),
            [one] => format!("did you mean the `{}` variable?", one.fg(EXPR)),
            many => format!(
                "did you mean one of these variables? {}",
                many.iter()
                    .map(|s| format!("`{}`", s.fg(EXPR)))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl fmt::Display for UnboundVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not bound", self.name)
    }
}

impl std::error::Error for UnboundVariable {}

/// Every span is labeled; when rendering an expression, pass the spans from
/// `Rendered::spans_of` so each occurrence of the variable is highlighted.
impl ErrorKind for UnboundVariable {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map(|span| span.start).unwrap_or(0);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.to_string())
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_message("this variable")
                    .with_color(EXPR)
            }));
        builder.set_help(self.help());
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;

    fn report_text(err: &UnboundVariable, src: &str, spans: &[Range<usize>]) -> String {
        let mut buf = Vec::new();
        err.build_report("expr", spans)
            .write(("expr", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn display() {
        assert_eq!(UnboundVariable::new("x").to_string(), "`x` is not bound");
    }

    #[test]
    fn report_mentions_name() {
        let text = report_text(&UnboundVariable::new("y"), "x + y", &[4..5]);
        assert!(text.contains("is not bound"));
        assert!(text.contains("this variable"));
        assert!(text.contains("add_var"));
    }

    #[test]
    fn report_with_suggestion() {
        let err = UnboundVariable {
            name: "x".to_string(),
            suggestions: vec!["x1".to_string()],
        };
        let text = report_text(&err, "x * 2", &[0..1]);
        assert!(text.contains("did you mean"));
    }
}
