use super::{Constant, LineNumber};

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub lines: Vec<Line>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    pub number: LineNumber,
    pub statement: Statement,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Assign(Variable, Expression),
    If(Condition, LineNumber),
    Print(Variable),
    Goto(LineNumber),
    Stop,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Term(Term),
    Add(Term, Term),
    Subtract(Term, Term),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Condition {
    Less(Term, Term),
    Equal(Term, Term),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Term {
    Var(Variable),
    Const(Constant),
}

/// A single letter variable, `A` through `Z`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable(char);

impl Variable {
    pub fn new(ch: char) -> Option<Variable> {
        if ch.is_ascii_uppercase() {
            Some(Variable(ch))
        } else {
            None
        }
    }

    pub fn name(self) -> char {
        self.0
    }

    /// Position in the alphabet, `A` is 1.
    pub fn code(self) -> u16 {
        self.0 as u16 - 'A' as u16 + 1
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
