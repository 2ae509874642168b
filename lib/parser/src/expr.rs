use std::fmt::{self, Display, Formatter};

use scanner::Operator;

/// A node of the expression tree. Every child is owned by exactly one parent.
///
/// Trees can be as deep as the input line is long, so nothing here walks them recursively.
#[derive(Debug, PartialEq)]
pub enum Expr {
    Number(i64),
    Variable(String),
    Binary { operator: Operator, left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Self {
        Expr::Binary { operator, left: Box::new(left), right: Box::new(right) }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            size += 1;
            if let Expr::Binary { left, right, .. } = expr {
                pending.push(left);
                pending.push(right);
            }
        }
        size
    }

    fn take_children(&mut self, into: &mut Vec<Expr>) {
        if let Expr::Binary { left, right, .. } = self {
            into.push(std::mem::replace(&mut **left, Expr::Number(0)));
            into.push(std::mem::replace(&mut **right, Expr::Number(0)));
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        // Each popped node is detached from its children before it drops
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

enum Piece<'e> {
    Expr(&'e Expr),
    Text(&'static str),
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Expr(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Expr(Expr::Number(n)) => write!(f, "{}", n)?,
                Piece::Expr(Expr::Variable(name)) => write!(f, "{}", name)?,
                Piece::Expr(Expr::Binary { operator, left, right }) => {
                    write!(f, "({} ", operator)?;
                    pending.extend([
                        Piece::Text(")"),
                        Piece::Expr(right),
                        Piece::Text(" "),
                        Piece::Expr(left),
                    ]);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chain(terms: usize) -> Expr {
        (1..terms).fold(Expr::Number(1), |acc, _| Expr::binary(Operator::Add, acc, Expr::Number(1)))
    }

    #[test]
    fn size() {
        assert_eq!(Expr::Number(3).size(), 1);
        assert_eq!(chain(4).size(), 7);
    }

    #[test]
    fn display() {
        let expr = Expr::binary(
            Operator::Mul,
            Expr::Variable("x".to_string()),
            Expr::binary(Operator::Sub, Expr::Number(2), Expr::Number(3)),
        );
        assert_eq!(expr.to_string(), "(* x (- 2 3))");
        assert_eq!(chain(3).to_string(), "(+ (+ 1 1) 1)");
    }

    #[test]
    fn deep_trees() {
        let expr = chain(1_000_000);
        assert_eq!(expr.size(), 1_999_999);
        let text = expr.to_string();
        assert!(text.starts_with("(+ (+ (+ "));
        assert!(text.ends_with(" 1) 1) 1)"));
        drop(expr);

        let right_deep = (1..1_000_000)
            .fold(Expr::Number(1), |acc, _| Expr::binary(Operator::Mul, Expr::Number(1), acc));
        assert!(right_deep.to_string().ends_with("(* 1 1))))"));
    }
}
