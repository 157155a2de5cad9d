use exprtree_compute::{Bindings, Expression};
use exprtree_parser::parser::fmt::Latex;
use log::debug;
use super::{command::Command, error::Error};

/// The state of a REPL session: the values bound so far.
#[derive(Debug, Clone, Default)]
pub struct Session {
    bindings: Bindings,
}

impl Session {
    /// Creates a session with the given initial bindings.
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Returns the values bound so far.
    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Compiles an expression that may reference every bound variable, plus the given extra
    /// names.
    fn compile(&self, source: &str, extra: &[&str]) -> Result<Expression, Error> {
        let names = self.bindings.names().chain(extra.iter().copied());
        Expression::compile_with(source, names).map_err(|err| Error::expr(source, err))
    }

    /// Runs one line of input, returning the text to print.
    pub fn run(&mut self, line: &str) -> Result<String, Error> {
        let command = Command::parse(line)?;
        debug!("running {:?}", command);

        match command {
            Command::Assign { name, expr } => {
                let value = self.compile(expr, &[])?
                    .evaluate(&self.bindings)
                    .map_err(|err| Error::expr(expr, err))?;
                self.bindings.add_var(name, value);
                Ok(format!("{} = {}", name.to_lowercase(), value))
            },
            Command::Derivative { var, expr } => {
                let mut derivative = self.compile(expr, &[var])?
                    .derivative(var)
                    .map_err(|err| Error::expr(expr, err))?;
                derivative.simplify().map_err(|err| Error::expr(expr, err))?;
                Ok(derivative.to_string())
            },
            Command::Simplify(expr) => {
                let mut compiled = self.compile(expr, &[])?;
                compiled.simplify().map_err(|err| Error::expr(expr, err))?;
                Ok(compiled.to_string())
            },
            Command::Latex(expr) => Ok(self.compile(expr, &[])?.as_display().to_string()),
            Command::Evaluate(expr) => {
                let value = self.compile(expr, &[])?
                    .evaluate(&self.bindings)
                    .map_err(|err| Error::expr(expr, err))?;
                Ok(value.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use exprtree_compute::numerical::error::kind::DomainEvaluationError;
    use exprtree_parser::parser::error::kind::EmptyInput;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn evaluate_and_bind() {
        let mut session = Session::default();
        assert_eq!(session.run("2 + 3 * 4").unwrap(), "14");
        assert_eq!(session.run("R = 2").unwrap(), "r = 2");
        assert_eq!(session.run("area = pi * r^2").unwrap(), format!("area = {}", std::f64::consts::PI * 4.0));
        assert_eq!(session.run("area / pi").unwrap(), "4");
    }

    #[test]
    fn derivative_and_simplify() {
        let mut session = Session::new(Bindings::from([("a", 3.0)]));
        assert_eq!(session.run(":d t t^2 + 1").unwrap(), "(2.0*t)");
        assert_eq!(session.run(":s a * (2 + 3)").unwrap(), "(a*5.0)");
        assert_eq!(session.run(":latex a / 2").unwrap(), "\\frac{a}{2}");
    }

    #[test]
    fn errors_keep_session() {
        let mut session = Session::new(Bindings::from([("x", 1.0)]));
        match session.run("ln(x - 1)") {
            Err(Error::Expr { source, err }) => {
                assert_eq!(source, "ln(x - 1)");
                assert!(err.is::<DomainEvaluationError>());
            },
            other => panic!("expected an evaluation error, got {:?}", other),
        }
        assert!(matches!(session.run("y + 1"), Err(Error::Expr { .. })));
        assert_eq!(session.bindings().get_var("x"), Some(1.0));
    }

    #[test]
    fn empty_assignment_reports_without_panicking() {
        let mut session = Session::default();
        assert_eq!(session.run("x = 2").unwrap(), "x = 2");
        match session.run("x =") {
            Err(Error::Expr { source, err }) => {
                assert_eq!(source, "");
                assert!(err.is::<EmptyInput>());
                let report = err.report_to_string("input", &source).unwrap();
                assert!(report.contains("cannot compile an empty expression"));
            },
            other => panic!("expected an empty input error, got {:?}", other),
        }
        assert_eq!(session.run("x + 1").unwrap(), "3");
    }
}
