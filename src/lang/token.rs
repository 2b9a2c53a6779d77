use super::ast::Variable;
use super::{Constant, Error, LineNumber, ValueRange};
use crate::error;
use std::collections::HashMap;
use std::convert::TryFrom;

thread_local!(
    static STRING_TO_TOKEN: HashMap<&'static str, Token> = Word::ALL
        .iter()
        .map(|w| (w.as_str(), Token::Word(w.clone())))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    End,
    Literal(String),
    Word(Word),
    Operator(Operator),
    Ident(String),
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        STRING_TO_TOKEN.with(|stt| stt.get(s).cloned())
    }

    /// Name of the token kind, as shown in token listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::End => "END",
            Token::Literal(_) => "LITERAL",
            Token::Word(_) => "WORD",
            Token::Operator(_) => "OPERATOR",
            Token::Ident(_) => "IDENT",
        }
    }

    /// The raw value carried alongside the kind. Reserved words carry `0`
    /// and operators carry their numeric code.
    pub fn value(&self) -> String {
        match self {
            Token::End => String::new(),
            Token::Literal(s) | Token::Ident(s) => s.clone(),
            Token::Word(_) => "0".to_string(),
            Token::Operator(op) => op.code().to_string(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            End => Ok(()),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
        }
    }
}

fn numeral<T>(s: &str) -> Option<T>
where
    T: ValueRange + PartialOrd + std::str::FromStr + ToString,
{
    let n = s.parse::<T>().ok()?;
    if n < T::min_value() || n > T::max_value() || n.to_string() != s {
        return None;
    }
    Some(n)
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Literal(s) = token {
            return numeral(s).ok_or_else(|| error!(RangeError; "INVALID LINE NUMBER"));
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

impl TryFrom<&Token> for Constant {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Literal(s) = token {
            if let Some(n) = numeral(s) {
                return Ok(n);
            }
        }
        Err(error!(SyntaxError; "EXPECTED VARIABLE OR CONSTANT"))
    }
}

impl TryFrom<&Token> for Variable {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        if let Token::Ident(s) = token {
            let mut chars = s.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) => Variable::new(ch)
                    .ok_or_else(|| error!(SyntaxError; "EXPECTED SINGLE LETTER VARIABLE")),
                _ => Err(error!(SyntaxError; "EXPECTED SINGLE LETTER VARIABLE")),
            };
        }
        Err(error!(SyntaxError; "EXPECTED VARIABLE"))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Word {
    Goto,
    If,
    Print,
    Stop,
}

impl Word {
    pub const ALL: [Word; 4] = [Word::Goto, Word::If, Word::Print, Word::Stop];

    pub fn as_str(&self) -> &'static str {
        use Word::*;
        match self {
            Goto => "GOTO",
            If => "IF",
            Print => "PRINT",
            Stop => "STOP",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Less,
    Equal,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '<' => Some(Less),
            '=' => Some(Equal),
            _ => None,
        }
    }

    pub fn code(self) -> u16 {
        use Operator::*;
        match self {
            Plus => 1,
            Minus => 2,
            Less => 3,
            Equal => 4,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Less => write!(f, "<"),
            Equal => write!(f, "="),
        }
    }
}
