use exprtree_parser::parser::ast::Call;
use crate::funcs;
use crate::numerical::{ctxt::Bindings, error::Error};
use super::Eval;

impl Eval for Call {
    fn eval(&self, bindings: &Bindings) -> Result<f64, Error> {
        let arg = self.arg.eval(bindings)?;
        funcs::eval(self.func, arg)
    }
}
