use super::{BCode, Tag};
use crate::lang::ast;
use crate::lang::token::Operator;

pub fn codegen(program: &ast::Program) -> BCode {
    let mut bcode = BCode::default();
    for line in &program.lines {
        bcode.push(Tag::Line, line.number);
        statement(&mut bcode, &line.statement);
        bcode.end_line();
    }
    bcode
}

fn statement(bcode: &mut BCode, statement: &ast::Statement) {
    use ast::Statement::*;
    match statement {
        Assign(var, expr) => {
            variable(bcode, *var);
            bcode.push(Tag::Op, Operator::Equal.code());
            expression(bcode, expr);
        }
        If(condition, target) => {
            bcode.push(Tag::If, 0);
            let (lhs, op, rhs) = match condition {
                ast::Condition::Less(lhs, rhs) => (lhs, Operator::Less, rhs),
                ast::Condition::Equal(lhs, rhs) => (lhs, Operator::Equal, rhs),
            };
            binary(bcode, lhs, op, rhs);
            bcode.push(Tag::Goto, *target);
        }
        Print(var) => {
            bcode.push(Tag::Print, 0);
            variable(bcode, *var);
        }
        Goto(target) => bcode.push(Tag::Goto, *target),
        Stop => bcode.push(Tag::Stop, 0),
    }
}

fn expression(bcode: &mut BCode, expression: &ast::Expression) {
    use ast::Expression::*;
    match expression {
        Term(term) => self::term(bcode, term),
        Add(lhs, rhs) => binary(bcode, lhs, Operator::Plus, rhs),
        Subtract(lhs, rhs) => binary(bcode, lhs, Operator::Minus, rhs),
    }
}

fn binary(bcode: &mut BCode, lhs: &ast::Term, op: Operator, rhs: &ast::Term) {
    term(bcode, lhs);
    bcode.push(Tag::Op, op.code());
    term(bcode, rhs);
}

fn term(bcode: &mut BCode, term: &ast::Term) {
    match term {
        ast::Term::Var(var) => variable(bcode, *var),
        ast::Term::Const(n) => bcode.push(Tag::Const, u16::from(*n)),
    }
}

fn variable(bcode: &mut BCode, var: ast::Variable) {
    bcode.push(Tag::Id, var.code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ast::*;

    #[test]
    fn test_subtract_opcode() {
        let a = Variable::new('A').unwrap();
        let program = Program {
            lines: vec![Line {
                number: 5,
                statement: Statement::Assign(a, Expression::Subtract(Term::Var(a), Term::Const(7))),
            }],
        };
        assert_eq!(codegen(&program).to_string(), "10 5 11 1 17 4 11 1 17 2 12 7\n0");
    }

    #[test]
    fn test_print_and_goto() {
        let program = Program {
            lines: vec![
                Line {
                    number: 1,
                    statement: Statement::Print(Variable::new('Z').unwrap()),
                },
                Line {
                    number: 2,
                    statement: Statement::Goto(1),
                },
            ],
        };
        assert_eq!(codegen(&program).to_string(), "10 1 15 0 11 26\n10 2 14 1\n0");
    }
}
