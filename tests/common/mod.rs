#![allow(dead_code)]
use bcode::lang::{Error, ErrorCode};
use bcode::mach::{Item, Tag};

pub fn exec(s: &str) -> String {
    match bcode::compile(s) {
        Ok(bcode) => bcode.to_string(),
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn fail(s: &str) -> Error {
    match bcode::compile(s) {
        Ok(bcode) => panic!("compiled to {:?}", bcode.to_string()),
        Err(e) => e,
    }
}

pub fn fail_code(s: &str) -> ErrorCode {
    fail(s).code()
}

pub fn pairs(s: &str) -> Vec<(Tag, u16)> {
    bcode::compile(s).unwrap().pairs().collect()
}

pub fn line_numbers(items: &[Item]) -> Vec<u16> {
    items
        .iter()
        .filter_map(|item| match item {
            Item::Pair(Tag::Line, n) => Some(*n),
            _ => None,
        })
        .collect()
}

pub const EXAMPLE: &str = "10 A=5+3\n20 IF A<10 GOTO 10\n30 PRINT A\n40 STOP\n";
