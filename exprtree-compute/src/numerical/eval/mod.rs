mod binary;
mod call;

use exprtree_parser::parser::ast::Node;
use super::{
    ctxt::Bindings,
    error::{kind::{DomainCause, DomainEvaluationError}, Error},
};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given bindings for its variables.
    fn eval(&self, bindings: &Bindings) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, without binding any variables.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Bindings::default())
    }
}

impl Eval for Node {
    fn eval(&self, bindings: &Bindings) -> Result<f64, Error> {
        match self {
            Node::Constant(value) => Ok(*value),
            Node::Variable(name) => bindings.get_var(name).ok_or_else(|| {
                Error::spanless(DomainEvaluationError {
                    cause: DomainCause::UnboundVariable { name: name.clone() },
                })
            }),
            Node::Binary(binary) => binary.eval(bindings),
            Node::Call(call) => call.eval(bindings),
        }
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use exprtree_parser::parser::Parser;
    use super::*;

    fn eval_str(source: &str, bindings: &Bindings) -> Result<f64, Error> {
        let names = bindings.names().map(str::to_string).collect::<Vec<_>>();
        Parser::new(source).with_variables(names).try_parse()?.eval(bindings)
    }

    fn eval_closed(source: &str) -> f64 {
        eval_str(source, &Bindings::default()).unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_closed("1 + 2"), 3.0);
        assert_eq!(eval_closed("2 + 3 * 4"), 14.0);
        assert_eq!(eval_closed("(2 + 3) * 4"), 20.0);
        assert_eq!(eval_closed("8 - 3 - 2"), 3.0);
        assert_eq!(eval_closed("2 ^ 3 ^ 2"), 64.0);
        assert_eq!(eval_closed("7 % 4 * 2"), 6.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_closed("((1 + 9) / 5) * 3"), 6.0);
        assert_eq!(eval_closed("((1 + 2)) * 3"), 9.0);
        assert_eq!(eval_closed("(1) + (2)"), 3.0);
        assert_eq!(eval_closed("(1 + 2) * (3 + 4)"), 21.0);
    }

    #[test]
    fn leading_minus() {
        assert_eq!(eval_closed("-2 + 5"), 3.0);
        assert_eq!(eval_closed("-2 ^ 2"), -4.0);
        assert_eq!(eval_closed("3 * (-2)"), -6.0);
    }

    #[test]
    fn constants_and_functions() {
        assert_float_relative_eq!(eval_closed("pi"), std::f64::consts::PI, 1e-12);
        assert_float_relative_eq!(eval_closed("ln(e)"), 1.0);
        assert_float_relative_eq!(eval_closed("90 * 2 * pi / 360"), std::f64::consts::FRAC_PI_2);
        assert_float_relative_eq!(eval_closed("Tg(PI / 4)"), 1.0);
    }

    #[test]
    fn variables() {
        let bindings = Bindings::from([("x", 3.0), ("y", 4.0), ("z", 0.0)]);
        assert_float_relative_eq!(eval_str("sqrt(x^2 + y^2 + z^2)", &bindings).unwrap(), 5.0);
        assert_eq!(eval_str("X * Y", &bindings).unwrap(), 12.0);
    }

    #[test]
    fn ieee_operators() {
        assert!(eval_closed("1 / 0").is_infinite());
        assert!(eval_closed("0 / 0").is_nan());
        assert!(eval_closed("ctg(0)").is_infinite());
    }

    #[test]
    fn unbound_variable() {
        let node = Parser::new("x + 1").with_variables(["x"]).try_parse().unwrap();
        let err = node.eval_default().unwrap_err();
        let kind = err.downcast_ref::<DomainEvaluationError>().unwrap();
        assert_eq!(kind.cause, DomainCause::UnboundVariable { name: "x".to_string() });
        assert!(err.spans.is_empty());
    }

    #[test]
    fn domain_errors() {
        for source in ["sqrt(0 - 1)", "ln(0)", "log(-5)", "asin(2)", "arccos(-3)"] {
            let err = eval_str(source, &Bindings::default()).unwrap_err();
            assert!(err.is::<DomainEvaluationError>(), "{} should fail", source);
        }
    }
}
