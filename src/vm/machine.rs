use super::{Error, Result};
use crate::codegen::{Instruction, Program};
use crate::io::{InputStream, OutputStream};
use crate::ops::Arithmetic;
use crate::types::{Address, Int};

type Stack = Vec<Int>;

/// Variable values by address. Unset addresses read as 0.
pub type Memory = fnv::FnvHashMap<Address, Int>;

pub struct StackMachine<'a, I, O> {
    input: &'a mut I,
    output: &'a mut O,
    // sparse: a listing may address any cell
    memory: Memory,
    stack: Stack,
}

enum Retcode {
    Continue,
    Jump(Address),
    Stop,
}

impl<I, O> StackMachine<'_, I, O>
where
    I: InputStream,
    O: OutputStream,
{
    pub fn new<'a>(input: &'a mut I, output: &'a mut O) -> StackMachine<'a, I, O> {
        StackMachine {
            input,
            output,
            memory: Memory::default(),
            stack: Stack::new(),
        }
    }

    pub fn push(&mut self, value: Int) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<Int> {
        self.stack.pop()
    }

    pub fn load(&self, address: Address) -> Int {
        self.memory.get(&address).copied().unwrap_or(0)
    }

    pub fn store(&mut self, address: Address, value: Int) {
        self.memory.insert(address, value);
    }

    pub fn into_memory(self) -> Memory {
        self.memory
    }

    fn pop_or(&mut self, what: &'static str) -> Result<Int> {
        self.pop().ok_or(Error::EmptyStack(what))
    }

    fn arithmetic(&mut self, op: Arithmetic, pc: Address) -> Result<()> {
        let rhs = self.pop_or("arithmetic, rhs")?;
        let lhs = self.pop_or("arithmetic, lhs")?;
        let value = op
            .apply(lhs, rhs)
            .map_err(|source| Error::Arithmetic { pc, source })?;
        self.push(value);
        Ok(())
    }

    fn execute(&mut self, instruction: &Instruction, pc: Address) -> Result<Retcode> {
        match *instruction {
            Instruction::Nop => {}
            Instruction::Stop => return Ok(Retcode::Stop),
            Instruction::Push(n) => self.push(n),
            Instruction::Load(address) => {
                let value = self.load(address);
                self.push(value);
            }
            Instruction::Store(address) => {
                let value = self.pop_or("store")?;
                self.store(address, value);
            }
            Instruction::Add => self.arithmetic(Arithmetic::Add, pc)?,
            Instruction::Sub => self.arithmetic(Arithmetic::Sub, pc)?,
            Instruction::Mult => self.arithmetic(Arithmetic::Mul, pc)?,
            Instruction::Div => self.arithmetic(Arithmetic::Div, pc)?,
            Instruction::Invert => {
                let value = self.pop_or("invert")?;
                self.push(value.wrapping_neg());
            }
            Instruction::Compare(cmp) => {
                let rhs = self.pop_or("compare, rhs")?;
                let lhs = self.pop_or("compare, lhs")?;
                self.push(Int::from(cmp.apply(lhs, rhs)));
            }
            Instruction::Jump(target) => return Ok(Retcode::Jump(target)),
            Instruction::JumpNo(target) => {
                if self.pop_or("jump_no")? == 0 {
                    return Ok(Retcode::Jump(target));
                }
            }
            Instruction::JumpYes(target) => {
                if self.pop_or("jump_yes")? != 0 {
                    return Ok(Retcode::Jump(target));
                }
            }
            Instruction::Print => {
                let value = self.pop_or("print")?;
                self.output.write(value)?;
            }
            Instruction::Input => {
                let value = self.input.read()?;
                self.push(value);
            }
        };

        Ok(Retcode::Continue)
    }

    pub fn run(&mut self, program: &Program) -> Result<()> {
        let mut pc = 0;
        while let Some(instruction) = program.get(pc) {
            match self.execute(instruction, pc)? {
                Retcode::Continue => pc += 1,
                // jumping right past the last instruction is a normal exit
                Retcode::Jump(target) if target <= program.len() => pc = target,
                Retcode::Jump(target) => {
                    return Err(Error::InvalidJump {
                        target,
                        len: program.len(),
                    })
                }
                Retcode::Stop => break,
            };
        }

        Ok(())
    }
}
