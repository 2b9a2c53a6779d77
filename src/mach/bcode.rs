use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tag {
    Line = 10,
    Id = 11,
    Const = 12,
    If = 13,
    Goto = 14,
    Print = 15,
    Stop = 16,
    Op = 17,
}

impl TryFrom<u16> for Tag {
    type Error = Error;
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        use Tag::*;
        Ok(match code {
            10 => Line,
            11 => Id,
            12 => Const,
            13 => If,
            14 => Goto,
            15 => Print,
            16 => Stop,
            17 => Op,
            _ => return Err(error!(SyntaxError; "UNKNOWN B_CODE TAG")),
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Item {
    Pair(Tag, u16),
    LineEnd,
    ProgramEnd,
}

/// An encoded program: tagged pairs, one line marker per source line,
/// and a single terminating zero.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BCode {
    items: Vec<Item>,
}

impl Default for BCode {
    fn default() -> Self {
        BCode {
            items: vec![Item::ProgramEnd],
        }
    }
}

impl BCode {
    pub(super) fn push(&mut self, tag: Tag, value: u16) {
        debug_assert_eq!(self.items.last(), Some(&Item::ProgramEnd));
        let end = self.items.len() - 1;
        self.items.insert(end, Item::Pair(tag, value));
    }

    pub(super) fn end_line(&mut self) {
        let end = self.items.len() - 1;
        self.items.insert(end, Item::LineEnd);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The pairs of each source line, in source order.
    pub fn lines(&self) -> impl Iterator<Item = &[Item]> {
        self.items[..self.items.len() - 1]
            .split(|item| *item == Item::LineEnd)
            .filter(|line| !line.is_empty())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (Tag, u16)> + '_ {
        self.items.iter().filter_map(|item| match item {
            Item::Pair(tag, value) => Some((*tag, *value)),
            _ => None,
        })
    }
}

impl std::fmt::Display for BCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut sep = "";
        for item in &self.items {
            match item {
                Item::Pair(tag, value) => {
                    write!(f, "{}{} {}", sep, *tag as u16, value)?;
                    sep = " ";
                }
                Item::LineEnd => {
                    writeln!(f)?;
                    sep = "";
                }
                Item::ProgramEnd => write!(f, "{}0", sep)?,
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for BCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bcode = BCode::default();
        let mut lines = s.trim_end().lines().peekable();
        while let Some(line) = lines.next() {
            let mut words = line.split_whitespace().map(|w| {
                w.parse::<u16>()
                    .map_err(|_| error!(SyntaxError; "B_CODE VALUE IS NOT A NUMBER"))
            });
            if lines.peek().is_none() {
                return match (words.next(), words.next()) {
                    (Some(Ok(0)), None) => Ok(bcode),
                    _ => Err(error!(SyntaxError; "B_CODE MUST END WITH 0")),
                };
            }
            let mut first = true;
            while let Some(tag) = words.next() {
                let tag = Tag::try_from(tag?)?;
                if first && tag != Tag::Line {
                    return Err(error!(SyntaxError; "B_CODE LINE MUST START WITH A LINE TAG"));
                }
                first = false;
                match words.next() {
                    Some(value) => bcode.push(tag, value?),
                    None => return Err(error!(SyntaxError; "B_CODE TAG WITHOUT VALUE")),
                }
            }
            if first {
                return Err(error!(SyntaxError; "EMPTY B_CODE LINE"));
            }
            bcode.end_line();
        }
        Err(error!(SyntaxError; "B_CODE MUST END WITH 0"))
    }
}
