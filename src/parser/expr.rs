// Relation ::= Expr ('=' | '!=' | '<' | '>' | '<=' | '>=') Expr
// Expr ::= Term (('+' | '-') Term)*
// Term ::= Factor (('*' | '/') Factor)*
// Factor ::= ['-'] Number | Var | '(' Expr ')' | 'read'

use super::{Construct, Parser};
use crate::codegen::Instruction;
use crate::ops::Arithmetic;
use crate::scanner::{Token, TokenKind, TokenSource};
use crate::types::Int;

fn arithmetic(op: Arithmetic) -> Instruction {
    match op {
        Arithmetic::Add => Instruction::Add,
        Arithmetic::Sub => Instruction::Sub,
        Arithmetic::Mul => Instruction::Mult,
        Arithmetic::Div => Instruction::Div,
    }
}

impl<S: TokenSource> Parser<S> {
    /// Leaves 1 on the stack if the relation holds, 0 otherwise
    pub(super) fn relation(&mut self) {
        self.expression();

        match *self.tokens.token() {
            Token::Cmp(cmp) => {
                self.next();
                self.expression();
                self.code.emit(Instruction::Compare(cmp));
            }
            _ => self.expected(Construct::Comparison),
        }
    }

    pub(super) fn expression(&mut self) {
        self.term();

        while let &Token::AddOp(op) = self.tokens.token() {
            self.next();
            self.term();
            self.code.emit(arithmetic(op));
        }
    }

    fn term(&mut self) {
        self.factor();

        while let &Token::MulOp(op) = self.tokens.token() {
            self.next();
            self.factor();
            self.code.emit(arithmetic(op));
        }
    }

    fn factor(&mut self) {
        match self.tokens.token() {
            Token::Number(_) | Token::AddOp(Arithmetic::Sub) => {
                self.literal();
            }
            Token::Identifier(name) => {
                let variable = self.symbols.resolve(name);
                self.next();
                self.code.emit(Instruction::Load(variable));
            }
            Token::LParen => {
                self.next();
                self.expression();
                self.must_be(TokenKind::RParen);
            }
            Token::Read => {
                self.next();
                self.code.emit(Instruction::Input);
            }
            _ => self.expected(Construct::Expression),
        }
    }

    /// ['-'] Number, pushed on the stack. Returns the signed value.
    pub(super) fn literal(&mut self) -> Option<Int> {
        let negative = self.accept_minus();

        let value = match *self.tokens.token() {
            Token::Number(n) => n,
            _ => {
                self.expected(Construct::Number);
                return None;
            }
        };

        self.next();
        self.code.emit(Instruction::Push(value));

        if negative {
            self.code.emit(Instruction::Invert);
            return Some(-value);
        }

        Some(value)
    }

    fn accept_minus(&mut self) -> bool {
        if *self.tokens.token() == Token::AddOp(Arithmetic::Sub) {
            self.next();
            return true;
        }

        false
    }
}
