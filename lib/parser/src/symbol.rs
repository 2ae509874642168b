use std::fmt::{self, Display, Formatter};

use scanner::Operator;

/// An entry of the operator stack or of the postfix output produced by [`crate::to_postfix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol<'a> {
    /// An opening bracket. Closing brackets are never stored.
    Bracket,
    Variable(&'a str),
    Number(i64),
    Operator(Operator),
}

impl Symbol<'_> {
    /// Operands rank 0. Brackets rank below everything so that precedence never pops them,
    /// only a matching `)` does.
    pub fn priority(&self) -> i8 {
        match self {
            Symbol::Bracket => i8::MIN,
            Symbol::Variable(_) | Symbol::Number(_) => 0,
            Symbol::Operator(op) => op.priority(),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Symbol::Operator(_))
    }
}

impl Display for Symbol<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Bracket => write!(f, "("),
            Symbol::Variable(name) => write!(f, "{name}"),
            Symbol::Number(n) => write!(f, "{n}"),
            Symbol::Operator(op) => write!(f, "{op}"),
        }
    }
}
