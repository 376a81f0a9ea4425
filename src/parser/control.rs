use fnv::FnvHashSet;

use super::{Diagnostic, Parser};
use crate::codegen::{Instruction, Slot};
use crate::ops::Cmp;
use crate::scanner::{TokenKind, TokenSource};
use crate::types::{Address, Int};

impl<S: TokenSource> Parser<S> {
    // 'if' was consumed
    pub(super) fn if_else(&mut self) {
        self.relation();
        let if_false = self.code.reserve();

        self.must_be(TokenKind::Then);
        self.statement_list();

        if self.accept(TokenKind::Else) {
            let end = self.code.reserve();
            self.code.patch_here(if_false, Instruction::JumpNo);
            self.statement_list();
            self.code.patch_here(end, Instruction::Jump);
        } else {
            self.code.patch_here(if_false, Instruction::JumpNo);
        }

        self.must_be(TokenKind::Fi);
    }

    // 'while' was consumed
    pub(super) fn while_loop(&mut self) {
        let condition = self.code.current_address();
        self.relation();
        let exit = self.code.reserve();

        self.must_be(TokenKind::Do);
        self.statement_list();
        self.must_be(TokenKind::Od);

        self.code.emit(Instruction::Jump(condition));
        self.code.patch_here(exit, Instruction::JumpNo);
    }

    /// Runs the body as many times as the number read at run time.
    /// Prints the line of 'loop' first.
    pub(super) fn counted_loop(&mut self) {
        let line = self.tokens.line() as Int;
        self.code.emit(Instruction::Push(line));
        self.code.emit(Instruction::Print);
        self.next();

        let counter = self.synthetic("loop-count");
        self.code.emit(Instruction::Input);
        self.code.emit(Instruction::Store(counter));

        let condition = self.code.current_address();
        self.code.emit(Instruction::Load(counter));
        self.code.emit(Instruction::Push(0));
        self.code.emit(Instruction::Compare(Cmp::Le));
        let exit = self.code.reserve();

        self.statement_list();

        self.code.emit(Instruction::Load(counter));
        self.code.emit(Instruction::Push(1));
        self.code.emit(Instruction::Sub);
        self.code.emit(Instruction::Store(counter));

        self.must_be(TokenKind::EndLoop);

        self.code.emit(Instruction::Jump(condition));
        self.code.patch_here(exit, Instruction::JumpYes);
    }

    // 'switch' was consumed
    pub(super) fn switch(&mut self) {
        self.expression();
        let scrutinee = self.synthetic("switch-value");
        self.code.emit(Instruction::Store(scrutinee));

        let matched = self.synthetic("switch-matched");
        self.code.emit(Instruction::Push(0));
        self.code.emit(Instruction::Store(matched));

        let mut constants = FnvHashSet::default();
        let mut exits = Vec::new();

        while self.accept(TokenKind::Case) {
            match self.case(scrutinee, matched, &mut constants) {
                Some(exit) => exits.push(exit),
                None => break,
            }
        }

        self.must_be(TokenKind::Default);
        self.must_be(TokenKind::Colon);

        self.code.emit(Instruction::Load(matched));
        let skip_default = self.code.reserve();
        self.statement_list();
        self.must_be(TokenKind::EndSwitch);

        self.code.patch_here(skip_default, Instruction::JumpYes);
        for exit in exits {
            self.code.patch_here(exit, Instruction::Jump);
        }
    }

    /// One 'case' clause after its keyword. Returns the jump out of the
    /// switch to patch, `None` if the clause is malformed.
    fn case(
        &mut self,
        scrutinee: Address,
        matched: Address,
        constants: &mut FnvHashSet<Int>,
    ) -> Option<Slot> {
        let line = self.tokens.line();
        let value = self.literal()?;

        // reported, but the clause is still translated to keep the parse in sync
        if !constants.insert(value) {
            self.report(Diagnostic::DuplicateCase { line, value });
        }

        self.code.emit(Instruction::Load(scrutinee));
        self.code.emit(Instruction::Compare(Cmp::Eq));

        let result = self.synthetic("case-result");
        self.code.emit(Instruction::Store(result));
        self.code.emit(Instruction::Load(result));
        let skip = self.code.reserve();

        if !self.expect(TokenKind::Colon) {
            return None;
        }

        self.statement_list();

        if !self.expect(TokenKind::Break) || !self.expect(TokenKind::Semicolon) {
            return None;
        }

        self.code.emit(Instruction::Push(1));
        self.code.emit(Instruction::Store(matched));
        let exit = self.code.reserve();

        self.code.patch_here(skip, Instruction::JumpNo);
        Some(exit)
    }
}
