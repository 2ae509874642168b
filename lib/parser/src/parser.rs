mod ast;
mod expr;
mod symbol;

use itertools::Itertools;
pub use scanner::Operator;
use scanner::{ScanError, Scanner, Token, TokenData};

pub use ast::Ast;
pub use expr::Expr;
pub use symbol::Symbol;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{0}")]
    Scan(#[from] ScanError),
    #[error("Incorrect bracket sequence")]
    IncorrectBracketSequence,
    #[error("Invalid expression")]
    InvalidExpression,
    #[error("Wrong expression")]
    WrongExpression,
    #[error("Empty expression")]
    EmptyExpression,
    /// Held by an [`Ast`] that was never given an expression.
    #[error("Empty")]
    Unset,
}

pub type Result<T> = std::result::Result<T, ParseError>;

pub fn parse(source: &str) -> Result<Expr> {
    let postfix = to_postfix(Scanner::new(source))?;
    log::trace!("Postfix: {}", postfix.iter().join(" "));
    build(postfix)
}

/// Shunting-yard: reorders infix tokens into postfix order.
///
/// Operators of equal priority pop each other, so all operators are left-associative.
pub fn to_postfix<'a>(
    tokens: impl IntoIterator<Item = std::result::Result<Token<'a>, ScanError>>,
) -> Result<Vec<Symbol<'a>>> {
    let mut stack: Vec<Symbol> = Vec::new();
    let mut output = Vec::new();

    for token in tokens {
        match token?.data {
            TokenData::LeftParen => stack.push(Symbol::Bracket),
            TokenData::RightParen => loop {
                match stack.pop() {
                    Some(Symbol::Bracket) => break,
                    Some(symbol) => output.push(symbol),
                    None => return Err(ParseError::IncorrectBracketSequence),
                }
            },
            TokenData::Number(n) => output.push(Symbol::Number(n)),
            TokenData::Identifier(name) => output.push(Symbol::Variable(name)),
            TokenData::Op(op) => {
                let symbol = Symbol::Operator(op);
                while stack.last().is_some_and(|top| top.priority() >= symbol.priority()) {
                    output.extend(stack.pop());
                }
                stack.push(symbol);
            }
        }
    }

    while let Some(symbol) = stack.pop() {
        if !symbol.is_operator() {
            return Err(ParseError::InvalidExpression);
        }
        output.push(symbol);
    }

    Ok(output)
}

/// Builds the expression tree from symbols in postfix order.
pub fn build(postfix: Vec<Symbol>) -> Result<Expr> {
    if postfix.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut operands: Vec<Expr> = Vec::with_capacity(postfix.len());
    for symbol in postfix {
        let expr = match symbol {
            Symbol::Number(n) => Expr::Number(n),
            Symbol::Variable(name) => Expr::Variable(name.to_string()),
            Symbol::Operator(operator) => {
                // The right operand was pushed last
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    return Err(ParseError::WrongExpression);
                };
                Expr::binary(operator, left, right)
            }
            Symbol::Bracket => return Err(ParseError::InvalidExpression),
        };
        operands.push(expr);
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(root), true) => Ok(root),
        _ => Err(ParseError::WrongExpression),
    }
}
