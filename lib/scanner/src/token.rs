use cursor::Col;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub data: TokenData<'a>,
    pub col: Col,
}

impl<'a> Token<'a> {
    pub fn new(data: TokenData<'a>, col: Col) -> Token<'a> {
        Self { data, col }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData<'a> {
    LeftParen,
    RightParen,

    // Literals.
    Number(i64),
    Identifier(&'a str),

    Op(Operator),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Operator {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Sub,
    #[display(fmt = "*")]
    Mul,
    #[display(fmt = "/")]
    Div,
}

impl Operator {
    /// Binding strength, higher binds tighter.
    pub fn priority(self) -> i8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }
}
