use super::{token::*, Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Scan a whole source text, stopping at the end of input.
pub fn lex(s: &str) -> Result<Vec<(Column, Token)>> {
    Scanner::new(s).collect()
}

const BLANK: &[char] = &['\n', '\t', '\r'];

fn is_alphabetic(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Pulls one token at a time out of the source text.
///
/// Leading and trailing blank lines, tabs and carriage returns are stripped
/// before scanning. Columns are character offsets into the original text.
pub struct Scanner<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    pos: usize,
    col: Column,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(s: &'a str) -> Scanner<'a> {
        let trimmed = s.trim_start_matches(BLANK);
        let pos = s[..s.len() - trimmed.len()].chars().count();
        Scanner {
            chars: trimmed.trim_end_matches(BLANK).chars().peekable(),
            pos,
            col: pos..pos,
            done: false,
        }
    }

    /// Column of the token most recently returned.
    pub fn column(&self) -> Column {
        self.col.clone()
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.whitespace();
        self.col = self.pos..self.pos;
        let token = match self.chars.peek() {
            None => Token::End,
            Some(&pk) if is_alphabetic(pk) => self.alphabetic(),
            Some(&pk) if is_digit(pk) => self.number(),
            Some(&pk) => {
                self.advance();
                self.col.end = self.pos;
                match Operator::from_char(pk) {
                    Some(op) => Token::Operator(op),
                    None => return Err(error!(LexicalError, ..&self.col)),
                }
            }
        };
        self.col.end = self.pos;
        Ok(token)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.pos += 1;
        Some(ch)
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !pk.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_digit(pk) {
                break;
            }
            s.push(pk);
            self.advance();
        }
        Token::Literal(s)
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            // A reserved word ends the run even when more letters follow.
            if !is_alphabetic(pk) || Token::from_string(&s).is_some() {
                break;
            }
            s.push(pk);
            self.advance();
        }
        match Token::from_string(&s.to_ascii_uppercase()) {
            Some(token) => token,
            None => Token::Ident(s),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<(Column, Token)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(Token::End) => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok((self.column(), token))),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_end_is_sticky() {
        let mut scanner = Scanner::new("STOP");
        assert_eq!(scanner.next_token(), Ok(Token::Word(Word::Stop)));
        assert_eq!(scanner.next_token(), Ok(Token::End));
        assert_eq!(scanner.next_token(), Ok(Token::End));
    }

    #[test]
    fn test_columns_skip_trimmed_prefix() {
        let mut scanner = Scanner::new("\n\n10 A");
        assert_eq!(scanner.next_token(), Ok(Token::Literal("10".to_string())));
        assert_eq!(scanner.column(), 2..4);
        assert_eq!(scanner.next_token(), Ok(Token::Ident("A".to_string())));
        assert_eq!(scanner.column(), 5..6);
    }

    #[test]
    fn test_invalid_character_column() {
        let mut scanner = Scanner::new("10 a");
        scanner.next_token().unwrap();
        let e = scanner.next_token().unwrap_err();
        assert_eq!(e.code(), ErrorCode::LexicalError);
        assert_eq!(e.column(), 3..4);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut scanner = Scanner::new("1 ? 2");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert!(scanner.next().is_none());
    }
}
