//! # B_code
//!
//! A compiler front end for a tiny line-numbered teaching language.
//!
//! Every source line starts with a line number between 1 and 1000 and holds
//! exactly one statement. Variables are the single letters `A` to `Z` and
//! constants run from 0 to 100.
//! ```text
//! 10 A=5+3
//! 20 IF A<10 GOTO 10
//! 30 PRINT A
//! 40 STOP
//! ```
//!
//! The program is translated into B_code: pairs of numeric tag and value,
//! one source line per output line, terminated by a single `0`.
//! ```text
//! 10 10 11 1 17 4 12 5 17 1 12 3
//! 10 20 13 0 11 1 17 3 12 10 14 10
//! 10 30 15 0 11 1
//! 10 40 16 0
//! 0
//! ```
//!
//! | Tag | Meaning  | Value                       |
//! |-----|----------|-----------------------------|
//! | 10  | line     | line number                 |
//! | 11  | variable | alphabet position, `A` is 1 |
//! | 12  | constant | the constant                |
//! | 13  | IF       | 0                           |
//! | 14  | GOTO     | target line number          |
//! | 15  | PRINT    | 0                           |
//! | 16  | STOP     | 0                           |
//! | 17  | operator | `+` 1, `-` 2, `<` 3, `=` 4  |
//!
//! The first invalid character or syntax error stops the compile.

pub mod lang;
pub mod mach;

pub use mach::compile;
