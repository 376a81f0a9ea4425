use std::collections::VecDeque;
use std::io::{self, BufRead, Stdin, Stdout, Write};

use thiserror::Error;

use crate::types::Int;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("end of input")]
    Exhausted,

    #[error("{0:?} is not an integer")]
    NotANumber(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub trait InputStream {
    fn read(&mut self) -> Result<Int, InputError>;
}

pub trait OutputStream {
    fn write(&mut self, value: Int) -> io::Result<()>;
}

/// One number per line, surrounding whitespace ignored
fn read_number<R: BufRead>(reader: &mut R) -> Result<Int, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Exhausted);
    }

    let text = line.trim();
    text.parse::<Int>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

// IO streams implementations
impl InputStream for Stdin {
    fn read(&mut self) -> Result<Int, InputError> {
        read_number(&mut self.lock())
    }
}

impl OutputStream for Stdout {
    fn write(&mut self, value: Int) -> io::Result<()> {
        writeln!(self, "{}", value)
    }
}

impl InputStream for VecDeque<Int> {
    fn read(&mut self) -> Result<Int, InputError> {
        self.pop_front().ok_or(InputError::Exhausted)
    }
}

impl OutputStream for Vec<Int> {
    fn write(&mut self, value: Int) -> io::Result<()> {
        self.push(value);
        Ok(())
    }
}

#[cfg(test)]
pub struct EmptyInput;
#[cfg(test)]
impl InputStream for EmptyInput {
    fn read(&mut self) -> Result<Int, InputError> {
        Err(InputError::Exhausted)
    }
}
