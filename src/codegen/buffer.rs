use super::program::{Instruction, Program};
use crate::types::{Address, Var};

/// Handle to a reserved instruction. Consumed by `CodeGen::patch`,
/// so a slot can be filled at most once.
#[must_use = "reserved slot has to be patched"]
#[derive(Debug, PartialEq, Eq)]
pub struct Slot(Address);

impl Slot {
    pub fn address(&self) -> Address {
        self.0
    }
}

/// Append-only instruction buffer with in-place patching of reserved slots.
#[derive(Debug, Default)]
pub struct CodeGen {
    instructions: Vec<Instruction>,
    pending: usize,
}

impl CodeGen {
    pub fn new() -> Self {
        CodeGen::default()
    }

    pub fn emit(&mut self, instruction: Instruction) -> Address {
        let address = self.current_address();
        self.instructions.push(instruction);
        address
    }

    pub fn reserve(&mut self) -> Slot {
        self.pending += 1;
        Slot(self.emit(Instruction::Nop))
    }

    pub fn patch(&mut self, slot: Slot, instruction: Instruction) {
        let location = &mut self.instructions[slot.address()];
        debug_assert_eq!(*location, Instruction::Nop);

        *location = instruction;
        self.pending -= 1;
    }

    /// Patches `slot` with a jump to the address of the next emitted instruction
    pub fn patch_here(&mut self, slot: Slot, jump: fn(Address) -> Instruction) {
        let here = self.current_address();
        self.patch(slot, jump(here));
    }

    /// Address the next emitted instruction will receive
    pub fn current_address(&self) -> Address {
        self.instructions.len()
    }

    pub fn pending_slots(&self) -> usize {
        self.pending
    }

    #[cfg(test)]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn finalize(self, variables: Vec<Var>) -> Program {
        debug_assert_eq!(self.pending, 0, "unpatched slots left in program");

        Program {
            instructions: self.instructions,
            variables,
        }
    }
}
