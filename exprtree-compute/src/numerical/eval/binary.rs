use exprtree_parser::parser::ast::Binary;
use crate::numerical::{ctxt::Bindings, error::Error};
use super::Eval;

impl Eval for Binary {
    fn eval(&self, bindings: &Bindings) -> Result<f64, Error> {
        let left = self.lhs.eval(bindings)?;
        let right = self.rhs.eval(bindings)?;
        Ok(self.op.apply(left, right))
    }
}
