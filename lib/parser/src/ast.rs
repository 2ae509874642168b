use crate::{Expr, ParseError};

/// Owns the result of parsing one line: either a complete expression tree or the reason
/// parsing failed. Never holds a partially built tree.
///
/// There is deliberately no `Clone`; use [`Ast::swap`] to move trees between holders.
#[derive(Debug)]
pub struct Ast {
    root: Result<Expr, ParseError>,
}

impl Default for Ast {
    fn default() -> Self {
        Self { root: Err(ParseError::Unset) }
    }
}

impl Ast {
    pub fn parse(source: &str) -> Self {
        let root = crate::parse(source);
        match &root {
            Ok(expr) => log::debug!("Parsed {:?} into {} nodes", source, expr.size()),
            Err(e) => log::debug!("Failed to parse {:?}: {:?}", source, e),
        }
        Self { root }
    }

    /// Replaces the held tree with the result of parsing `source`.
    pub fn reparse(&mut self, source: &str) {
        *self = Self::parse(source);
    }

    pub fn root(&self) -> Result<&Expr, &ParseError> {
        self.root.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.root.is_err()
    }

    pub fn error(&self) -> Option<&ParseError> {
        self.root.as_ref().err()
    }

    pub fn error_message(&self) -> String {
        match &self.root {
            Ok(_) => "No errors".to_string(),
            Err(e) => e.to_string(),
        }
    }

    pub fn swap(&mut self, other: &mut Ast) {
        std::mem::swap(&mut self.root, &mut other.root);
    }
}
