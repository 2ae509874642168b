use cursor::{Col, Cursor};

mod token;
pub use token::{Operator, Token, TokenData};
use TokenData::*;

/// Largest integer literal accepted in source text. Results of arithmetic are not bounded by it.
pub const MAX_LITERAL: i64 = u16::MAX as i64;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Wrong symbol")]
    WrongSymbol(char),
    #[error("Too big number")]
    TooBigNumber,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{error}")]
pub struct ScanError {
    pub error: ScanErrorType,
    pub col: Col,
}

/// Lazily splits one input line into tokens.
///
/// The scanner stops after the first error, so consumers can process tokens as they come and
/// still see errors in left-to-right order.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), failed: false }
    }

    fn number(&mut self) -> Result<TokenData<'a>, ScanErrorType> {
        let mut value = 0;
        while let Some(digit) = self.cursor.peek().and_then(|c| c.to_digit(10)) {
            self.cursor.next();
            value = value * 10 + i64::from(digit);
            if value > MAX_LITERAL {
                return Err(ScanErrorType::TooBigNumber);
            }
        }
        Ok(Number(value))
    }

    fn identifier(&mut self, start: &Cursor<'a>) -> TokenData<'a> {
        self.cursor.advance_while(|c| c.is_ascii_alphanumeric());
        Identifier(start.slice_until(&self.cursor))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (start, data) = loop {
            let start = self.cursor.clone();
            let data = match self.cursor.next()? {
                ' ' => continue,
                '(' => Ok(LeftParen),
                ')' => Ok(RightParen),
                d if d.is_ascii_digit() => {
                    self.cursor = start.clone();
                    self.number()
                }
                c if c.is_ascii_alphabetic() => Ok(self.identifier(&start)),
                c => Operator::from_char(c).map(Op).ok_or(ScanErrorType::WrongSymbol(c)),
            };
            break (start, data);
        };

        Some(match data {
            Ok(data) => Ok(Token::new(data, start.col())),
            Err(error) => {
                log::debug!("Scan error at column {}: {:?}", start.col(), error);
                self.failed = true;
                Err(ScanError { error, col: start.col() })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scan(source: &str) -> Vec<Result<Token, ScanError>> {
        Scanner::new(source).collect()
    }

    fn data(source: &str) -> Vec<TokenData> {
        Scanner::new(source).map(|t| t.unwrap().data).collect()
    }

    #[test]
    fn single_char_tokens() {
        assert_eq!(
            data("()+-*/"),
            vec![
                LeftParen,
                RightParen,
                Op(Operator::Add),
                Op(Operator::Sub),
                Op(Operator::Mul),
                Op(Operator::Div),
            ]
        );
    }

    #[test]
    fn columns() {
        assert_eq!(
            scan("12 + ab"),
            vec![
                Ok(Token::new(Number(12), Col(1))),
                Ok(Token::new(Op(Operator::Add), Col(4))),
                Ok(Token::new(Identifier("ab"), Col(6))),
            ]
        );
    }

    #[test]
    fn identifiers() {
        assert_eq!(data("x1y2 Foo"), vec![Identifier("x1y2"), Identifier("Foo")]);
        // A digit run is always a number, even when letters follow
        assert_eq!(data("2x"), vec![Number(2), Identifier("x")]);
    }

    #[test]
    fn literal_ceiling() {
        assert_eq!(data("65535"), vec![Number(65535)]);
        assert_eq!(data("0007"), vec![Number(7)]);
        assert_eq!(data("9 90 909"), vec![Number(9), Number(90), Number(909)]);

        assert_eq!(
            scan("1 + 65536"),
            vec![
                Ok(Token::new(Number(1), Col(1))),
                Ok(Token::new(Op(Operator::Add), Col(3))),
                Err(ScanError { error: ScanErrorType::TooBigNumber, col: Col(5) }),
            ]
        );
        assert_eq!(ScanErrorType::TooBigNumber.to_string(), "Too big number");
    }

    #[test]
    fn wrong_symbols() {
        assert_eq!(
            scan("1 % 2"),
            vec![
                Ok(Token::new(Number(1), Col(1))),
                Err(ScanError { error: ScanErrorType::WrongSymbol('%'), col: Col(3) }),
            ]
        );
        // Only plain spaces are whitespace
        assert_eq!(
            scan("\t1"),
            vec![Err(ScanError { error: ScanErrorType::WrongSymbol('\t'), col: Col(1) })]
        );
        assert_eq!(
            scan("ä"),
            vec![Err(ScanError { error: ScanErrorType::WrongSymbol('ä'), col: Col(1) })]
        );
        assert_eq!(ScanErrorType::WrongSymbol('%').to_string(), "Wrong symbol");
    }

    #[test]
    fn numbers_keep_their_columns() {
        assert_eq!(
            scan("(305)"),
            vec![
                Ok(Token::new(LeftParen, Col(1))),
                Ok(Token::new(Number(305), Col(2))),
                Ok(Token::new(RightParen, Col(5))),
            ]
        );
    }

    #[test]
    fn stops_after_first_error() {
        let mut scanner = Scanner::new("# 1");
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn empty_and_blank() {
        assert_eq!(scan(""), vec![]);
        assert_eq!(scan("    "), vec![]);
    }
}
