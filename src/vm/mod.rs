mod machine;

use thiserror::Error;

use crate::codegen::Program;
use crate::io::{InputError, InputStream, OutputStream};
use crate::ops::ArithmeticError;
use crate::types::Address;

pub use self::machine::{Memory, StackMachine};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty stack ({0})")]
    EmptyStack(&'static str),

    #[error("Cannot read input: {0}")]
    Input(#[from] InputError),

    #[error("Jump to {target} outside of program of {len} instructions")]
    InvalidJump { target: Address, len: usize },

    #[error("{source} at {pc}")]
    Arithmetic { pc: Address, source: ArithmeticError },

    #[error("Output failure: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Runs `program` to completion, returns the final memory.
pub fn run<I, O>(program: &Program, input: &mut I, output: &mut O) -> Result<Memory>
where
    I: InputStream,
    O: OutputStream,
{
    let mut machine = StackMachine::new(input, output);
    machine.run(program)?;
    Ok(machine.into_memory())
}
