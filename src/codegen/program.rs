use std::fmt;

use crate::ops::Cmp;
use crate::types::{Address, Int, Var};

// Stack machine instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Placeholder left by `CodeGen::reserve`
    Nop,
    Stop,
    Push(Int),
    Load(Address),
    Store(Address),
    Add,
    Sub,
    Mult,
    Div,
    Invert,
    Compare(Cmp),
    Jump(Address),
    JumpNo(Address),
    JumpYes(Address),
    Print,
    Input,
}

impl Instruction {
    pub fn opcode(&self) -> &'static str {
        match self {
            Instruction::Nop => "NOP",
            Instruction::Stop => "STOP",
            Instruction::Push(_) => "PUSH",
            Instruction::Load(_) => "LOAD",
            Instruction::Store(_) => "STORE",
            Instruction::Add => "ADD",
            Instruction::Sub => "SUB",
            Instruction::Mult => "MULT",
            Instruction::Div => "DIV",
            Instruction::Invert => "INVERT",
            Instruction::Compare(_) => "COMPARE",
            Instruction::Jump(_) => "JUMP",
            Instruction::JumpNo(_) => "JUMP_NO",
            Instruction::JumpYes(_) => "JUMP_YES",
            Instruction::Print => "PRINT",
            Instruction::Input => "INPUT",
        }
    }

    pub fn operand(&self) -> Option<Int> {
        match *self {
            Instruction::Push(n) => Some(n),
            Instruction::Compare(cmp) => Some(cmp.code()),
            Instruction::Load(address)
            | Instruction::Store(address)
            | Instruction::Jump(address)
            | Instruction::JumpNo(address)
            | Instruction::JumpYes(address) => Some(address as Int),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(operand) => write!(f, "{}\t{}", self.opcode(), operand),
            None => f.write_str(self.opcode()),
        }
    }
}

/// Finalized translation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub(in crate::codegen) instructions: Vec<Instruction>,
    // variable names indexed by address; empty for programs loaded from a listing
    pub(in crate::codegen) variables: Vec<Var>,
}

impl Program {
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn get(&self, address: Address) -> Option<&Instruction> {
        self.instructions.get(address)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = (Address, &Var)> {
        self.variables.iter().enumerate()
    }
}

// One instruction per line: "<address>:\t<OPCODE>[\t<operand>]"
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (address, instruction) in self.instructions().iter().enumerate() {
            writeln!(f, "{}:\t{}", address, instruction)?;
        }

        Ok(())
    }
}
