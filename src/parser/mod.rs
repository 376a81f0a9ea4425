// Program ::= 'begin' Statements 'end'
// Statements ::= [Statement (';' Statement)*]
// Statement ::= Assign | IfElse | While | Write | Loop | Switch
// Assign ::= Var ':=' Expr
// IfElse ::= 'if' Relation 'then' Statements ['else' Statements] 'fi'
// While ::= 'while' Relation 'do' Statements 'od'
// Write ::= 'write' '(' Expr ')'
// Loop ::= 'loop' Statements 'endloop'
// Switch ::= 'switch' Expr ('case' ['-'] Number ':' Statements 'break' ';')*
//            'default' ':' Statements 'endswitch'
//
// Every rule emits its code while it is recognized, there is no syntax tree.

mod control;
mod error;
mod expr;
mod symbols;

use crate::codegen::{CodeGen, Instruction, Program};
use crate::scanner::{Scanner, Token, TokenKind, TokenSource};
use crate::types::Address;

pub use self::error::{CompileError, Construct, Diagnostic};
pub use self::symbols::SymbolTable;

pub fn compile(source: &str) -> Result<Program, CompileError> {
    Parser::new(Scanner::new(source)).parse()
}

pub struct Parser<S> {
    tokens: S,
    code: CodeGen,
    symbols: SymbolTable,
    // translation failed iff this is not empty
    diagnostics: Vec<Diagnostic>,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(tokens: S) -> Self {
        Parser {
            tokens,
            code: CodeGen::new(),
            symbols: SymbolTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Translates the whole program. Code is finalized only if no diagnostic was raised.
    pub fn parse(mut self) -> Result<Program, CompileError> {
        self.program();

        if self.failed() {
            return Err(CompileError {
                diagnostics: self.diagnostics,
            });
        }

        Ok(self.code.finalize(self.symbols.into_names()))
    }

    fn failed(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn program(&mut self) {
        self.must_be(TokenKind::Begin);
        self.statement_list();
        self.must_be(TokenKind::End);
        self.code.emit(Instruction::Stop);
    }

    fn statement_list(&mut self) {
        if self.closes_block() {
            return;
        }

        loop {
            self.statement();
            if !self.accept(TokenKind::Semicolon) {
                break;
            }
        }
    }

    fn closes_block(&self) -> bool {
        matches!(
            self.tokens.token().kind(),
            TokenKind::End
                | TokenKind::Od
                | TokenKind::Else
                | TokenKind::Fi
                | TokenKind::EndLoop
                | TokenKind::Break
                | TokenKind::Default
                | TokenKind::EndSwitch
        )
    }

    fn statement(&mut self) {
        if let Token::Identifier(name) = self.tokens.token() {
            let variable = self.symbols.resolve(name);
            self.next();
            self.must_be(TokenKind::Assign);
            self.expression();
            self.code.emit(Instruction::Store(variable));
        } else if self.accept(TokenKind::If) {
            self.if_else();
        } else if self.accept(TokenKind::While) {
            self.while_loop();
        } else if self.accept(TokenKind::Write) {
            self.must_be(TokenKind::LParen);
            self.expression();
            self.must_be(TokenKind::RParen);
            self.code.emit(Instruction::Print);
        } else if self.see(TokenKind::Loop) {
            // LOOP is consumed by counted_loop, which needs its line
            self.counted_loop();
        } else if self.accept(TokenKind::Switch) {
            self.switch();
        } else {
            self.expected(Construct::Statement);
        }
    }

    /// Storage for compiler state; the name is unique per construct and
    /// can't clash with source identifiers, which start with a letter.
    fn synthetic(&mut self, purpose: &str) -> Address {
        let name = format!("{}:{}", self.code.current_address(), purpose);
        self.symbols.resolve(&name)
    }

    fn next(&mut self) {
        self.tokens.advance();
    }

    fn see(&self, kind: TokenKind) -> bool {
        self.tokens.token().kind() == kind
    }

    fn accept(&mut self, kind: TokenKind) -> bool {
        if self.see(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Like `accept`, but reports the mismatch
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.accept(kind) {
            return true;
        }

        self.report(Diagnostic::Unexpected {
            line: self.tokens.line(),
            found: self.tokens.token().kind(),
            expected: kind,
        });
        false
    }

    fn must_be(&mut self, kind: TokenKind) {
        if !self.expect(kind) {
            self.recover(kind);
        }
    }

    // skip up to and including `kind`, or up to end of file
    fn recover(&mut self, kind: TokenKind) {
        while !self.see(kind) && !self.see(TokenKind::Eof) {
            self.next();
        }
        self.accept(kind);
    }

    fn expected(&mut self, what: Construct) {
        self.report(Diagnostic::Expected {
            line: self.tokens.line(),
            what,
        });
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
