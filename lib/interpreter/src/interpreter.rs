use parser::{Ast, Expr, Operator, ParseError};

mod context;
pub use context::Context;

mod ops;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("Unknown variable {0}")]
    UnknownVariable(String),
    #[error("Overflow")]
    Overflow,
    #[error("Division by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait Evaluate {
    fn evaluate(&self, context: &Context) -> Result<i64>;
}

enum Step<'e> {
    Visit(&'e Expr),
    Apply(Operator),
}

impl Evaluate for Expr {
    /// Post-order walk over an explicit stack. A left subtree is finished before its sibling
    /// is visited, so the first failure returns without touching anything to its right.
    fn evaluate(&self, context: &Context) -> Result<i64> {
        let mut steps = vec![Step::Visit(self)];
        let mut values = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Expr::Number(n)) => values.push(*n),
                Step::Visit(Expr::Variable(name)) => values.push(context.get(name)?),
                Step::Visit(Expr::Binary { operator, left, right }) => {
                    steps.extend([Step::Apply(*operator), Step::Visit(right), Step::Visit(left)]);
                }
                Step::Apply(operator) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("both operands are evaluated before their operator");
                    };
                    let result = ops::apply(operator, left, right);
                    log::trace!("{left} {operator} {right} => {result:?}");
                    values.push(result?);
                }
            }
        }

        match values[..] {
            [value] => Ok(value),
            _ => unreachable!("a tree evaluates to exactly one value"),
        }
    }
}

impl Evaluate for Ast {
    fn evaluate(&self, context: &Context) -> Result<i64> {
        match self.root() {
            Ok(expr) => expr.evaluate(context),
            Err(e) => Err(e.clone().into()),
        }
    }
}
