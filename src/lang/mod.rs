/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the
line-numbered teaching language.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::Scanner;
pub use parse::parse;

pub type Column = std::ops::Range<usize>;
pub type LineNumber = u16;
pub type Constant = u8;

/// Inclusive bounds a numeral must respect in each grammar position.
pub trait ValueRange: Sized {
    fn min_value() -> Self;
    fn max_value() -> Self;
}

impl ValueRange for LineNumber {
    fn min_value() -> Self {
        1
    }
    fn max_value() -> Self {
        1000
    }
}

impl ValueRange for Constant {
    fn min_value() -> Self {
        0
    }
    fn max_value() -> Self {
        100
    }
}
