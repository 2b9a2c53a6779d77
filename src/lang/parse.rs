use super::{ast::*, token::*, Column, Constant, Error, LineNumber, Scanner};
use crate::error;
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Parse a complete source text. The first error aborts the parse.
pub fn parse(s: &str) -> Result<Program> {
    Parser::parse(s)
}

struct Parser<'a> {
    scanner: Scanner<'a>,
    token: Token,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(s: &'a str) -> Result<Program> {
        let mut scanner = Scanner::new(s);
        let token = scanner.next_token()?;
        let mut parse = Parser {
            col: scanner.column(),
            scanner,
            token,
        };
        let mut program = Program::default();
        while let Token::Literal(_) = parse.token {
            program.lines.push(parse.line()?);
        }
        if parse.token != Token::End {
            return Err(error!(SyntaxError, ..&parse.col; "EXPECTED LINE NUMBER"));
        }
        debug!(lines = program.lines.len(), "parsed program");
        Ok(program)
    }

    fn advance(&mut self) -> Result<()> {
        trace!(kind = self.token.kind(), value = %self.token.value(), "matched");
        self.token = self.scanner.next_token()?;
        self.col = self.scanner.column();
        Ok(())
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if self.token == token {
            return self.advance();
        }
        Err(error!(SyntaxError, ..&self.col;
            match token {
                Token::End => "EXPECTED END OF PROGRAM",
                Token::Literal(_) => "EXPECTED LITERAL",
                Token::Ident(_) => "EXPECTED VARIABLE",
                Token::Word(Word::Goto) => "EXPECTED GOTO",
                Token::Word(Word::If) => "EXPECTED IF",
                Token::Word(Word::Print) => "EXPECTED PRINT",
                Token::Word(Word::Stop) => "EXPECTED STOP",
                Token::Operator(Operator::Equal) => "EXPECTED =",
                Token::Operator(_) => "EXPECTED OPERATOR",
            }
        ))
    }

    fn line(&mut self) -> Result<Line> {
        let number = self.line_number()?;
        let statement = match Statement::for_token(self) {
            Ok(statement) => statement,
            Err(e) => return Err(e.in_line_number(number)),
        };
        Ok(Line { number, statement })
    }

    /// A numeral in line number position, which must be in range.
    fn line_number(&mut self) -> Result<LineNumber> {
        let number = LineNumber::try_from(&self.token).map_err(|e| e.in_column(&self.col))?;
        self.advance()?;
        Ok(number)
    }

    fn variable(&mut self) -> Result<Variable> {
        let var = Variable::try_from(&self.token).map_err(|e| e.in_column(&self.col))?;
        self.advance()?;
        Ok(var)
    }

    fn term(&mut self) -> Result<Term> {
        let term = match self.token {
            Token::Ident(_) => Variable::try_from(&self.token).map(Term::Var),
            _ => Constant::try_from(&self.token).map(Term::Const),
        };
        let term = term.map_err(|e| e.in_column(&self.col))?;
        self.advance()?;
        Ok(term)
    }

    fn expression(&mut self) -> Result<Expression> {
        let lhs = self.term()?;
        match self.token {
            Token::Operator(Operator::Plus) => {
                self.advance()?;
                Ok(Expression::Add(lhs, self.term()?))
            }
            Token::Operator(Operator::Minus) => {
                self.advance()?;
                Ok(Expression::Subtract(lhs, self.term()?))
            }
            Token::Operator(_) => Err(error!(SyntaxError, ..&self.col; "EXPECTED + OR -")),
            _ => Ok(Expression::Term(lhs)),
        }
    }

    fn condition(&mut self) -> Result<Condition> {
        let lhs = self.term()?;
        let relation = match self.token {
            Token::Operator(op @ Operator::Less) | Token::Operator(op @ Operator::Equal) => op,
            _ => return Err(error!(SyntaxError, ..&self.col; "EXPECTED < OR =")),
        };
        self.advance()?;
        let rhs = self.term()?;
        Ok(match relation {
            Operator::Less => Condition::Less(lhs, rhs),
            _ => Condition::Equal(lhs, rhs),
        })
    }
}

impl Statement {
    fn for_token(parse: &mut Parser) -> Result<Statement> {
        match &parse.token {
            Token::Ident(_) => Self::r#let(parse),
            Token::Word(Word::If) => Self::r#if(parse),
            Token::Word(Word::Print) => Self::r#print(parse),
            Token::Word(Word::Goto) => Self::r#goto(parse),
            Token::Word(Word::Stop) => Self::r#stop(parse),
            _ => Err(error!(SyntaxError, ..&parse.col; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser) -> Result<Statement> {
        let var = parse.variable()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        Ok(Statement::Assign(var, parse.expression()?))
    }

    fn r#if(parse: &mut Parser) -> Result<Statement> {
        parse.expect(Token::Word(Word::If))?;
        let condition = parse.condition()?;
        parse.expect(Token::Word(Word::Goto))?;
        Ok(Statement::If(condition, parse.line_number()?))
    }

    fn r#print(parse: &mut Parser) -> Result<Statement> {
        parse.expect(Token::Word(Word::Print))?;
        Ok(Statement::Print(parse.variable()?))
    }

    fn r#goto(parse: &mut Parser) -> Result<Statement> {
        parse.expect(Token::Word(Word::Goto))?;
        Ok(Statement::Goto(parse.line_number()?))
    }

    fn r#stop(parse: &mut Parser) -> Result<Statement> {
        parse.expect(Token::Word(Word::Stop))?;
        Ok(Statement::Stop)
    }
}
