//! Line-oriented session on top of the parser and the interpreter.
//!
//! Every input line is one of
//! - `calculate`: evaluate the current expression,
//! - `name = expr`: evaluate `expr` right away and store the value as `name`,
//! - anything else: parse it and make it the current expression.
//!
//! Each line produces exactly one line of output.

use std::{
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write},
};

use interpreter::{Context, Evaluate};
use parser::Ast;

const CALCULATE: &str = "calculate";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command<'a> {
    Calculate,
    /// `name` is everything before the first `=`, unvalidated.
    Assign { name: &'a str, value: &'a str },
    Expression(&'a str),
}

impl<'a> Command<'a> {
    pub fn from_line(line: &'a str) -> Self {
        if line == CALCULATE {
            return Command::Calculate;
        }
        match line.split_once('=') {
            Some((name, value)) => Command::Assign { name, value },
            None => Command::Expression(line),
        }
    }
}

/// A variable name is an ASCII letter followed by ASCII letters and digits.
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Reads one line from `input`, or `None` at end of input.
///
/// Bytes that are not valid UTF-8 become U+FFFD, so they reach the scanner as a wrong symbol
/// instead of failing the read.
pub fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Formats an evaluation result the way the session prints it.
pub struct Outcome<'a>(pub &'a interpreter::Result<i64>);

impl Display for Outcome<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(n) => write!(f, "{n}"),
            Err(e) => write!(f, "Error: {e}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    context: Context,
    ast: Ast,
}

impl Session {
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn run_line(&mut self, line: &str, output: &mut impl Write) -> io::Result<()> {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let command = Command::from_line(line);
        log::debug!("Running {:?}", command);

        let message = match command {
            Command::Calculate => self.calculate(),
            Command::Expression(source) => self.set_expression(source),
            Command::Assign { name, value } => self.assign(name, value),
        };
        writeln!(output, "{message}")
    }

    fn calculate(&self) -> String {
        Outcome(&self.ast.evaluate(&self.context)).to_string()
    }

    fn set_expression(&mut self, source: &str) -> String {
        let mut ast = Ast::parse(source);
        if let Some(e) = ast.error() {
            return format!("Expression has not been set. Error: {e}");
        }
        self.ast.swap(&mut ast);
        "Expression has been set".to_string()
    }

    fn assign(&mut self, name: &str, value: &str) -> String {
        if name.is_empty() {
            return "Empty variable".to_string();
        }
        let name = name.trim_end_matches(' ');
        if !is_valid_variable_name(name) {
            return "Invalid variable".to_string();
        }

        let ast = Ast::parse(value);
        if ast.is_error() {
            return format!("Invalid value. {}", ast.error_message());
        }
        let value = match ast.evaluate(&self.context) {
            Ok(value) => value,
            Err(e) => return format!("Invalid expression. Error: {e}"),
        };

        let verb = if self.context.contains(name) { "changed" } else { "added" };
        self.context.set(name, value);
        format!("Variable {name} has been {verb}")
    }
}
