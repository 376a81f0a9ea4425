// Listing ::= Line*
// Line ::= Address ':' Opcode [Operand]
// Opcode ::= 'NOP' | 'STOP' | 'PUSH' | 'LOAD' | 'STORE' | 'ADD' | 'SUB' | 'MULT' | 'DIV'
//          | 'INVERT' | 'COMPARE' | 'JUMP' | 'JUMP_NO' | 'JUMP_YES' | 'PRINT' | 'INPUT'

use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_opt, map_res, opt, recognize, value};
use nom::sequence::{pair, preceded, terminated};
use thiserror::Error;

use super::program::{Instruction, Program};
use crate::nom::{key, spaces, Input, Parsed};
use crate::ops::Cmp;
use crate::types::{Address, Int};

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Line {line}: {source}")]
    Syntax {
        line: usize,
        source: crate::nom::Error,
    },

    #[error("Line {line}: instruction at address {found}, expected {expected}")]
    Misplaced {
        line: usize,
        expected: Address,
        found: Address,
    },
}

impl FromStr for Program {
    type Err = ListingError;

    fn from_str(listing: &str) -> Result<Self, Self::Err> {
        let mut instructions = Vec::new();

        for (index, text) in listing.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }

            let (address, instruction) = crate::nom::parse("instruction", line, text)
                .map_err(|source| ListingError::Syntax {
                    line: index + 1,
                    source,
                })?;

            if address != instructions.len() {
                return Err(ListingError::Misplaced {
                    line: index + 1,
                    expected: instructions.len(),
                    found: address,
                });
            }

            instructions.push(instruction);
        }

        Ok(Program {
            instructions,
            variables: Vec::new(),
        })
    }
}

fn line(input: Input) -> Parsed<(Address, Instruction)> {
    pair(terminated(address, key(":")), instruction)(input)
}

fn address(input: Input) -> Parsed<Address> {
    preceded(spaces, map_res(digit1, |n: Input| n.parse::<Address>()))(input)
}

fn integer(input: Input) -> Parsed<Int> {
    preceded(
        spaces,
        map_res(recognize(pair(opt(char('-')), digit1)), |n: Input| {
            n.parse::<Int>()
        }),
    )(input)
}

fn instruction(input: Input) -> Parsed<Instruction> {
    // longer opcodes go first: JUMP_NO before JUMP
    alt((
        map(preceded(key("PUSH"), integer), Instruction::Push),
        map(preceded(key("LOAD"), address), Instruction::Load),
        map(preceded(key("STORE"), address), Instruction::Store),
        map_opt(preceded(key("COMPARE"), integer), |code| {
            Cmp::from_code(code).map(Instruction::Compare)
        }),
        map(preceded(key("JUMP_NO"), address), Instruction::JumpNo),
        map(preceded(key("JUMP_YES"), address), Instruction::JumpYes),
        map(preceded(key("JUMP"), address), Instruction::Jump),
        value(Instruction::Nop, key("NOP")),
        value(Instruction::Stop, key("STOP")),
        value(Instruction::Add, key("ADD")),
        value(Instruction::Sub, key("SUB")),
        value(Instruction::Mult, key("MULT")),
        value(Instruction::Div, key("DIV")),
        value(Instruction::Invert, key("INVERT")),
        value(Instruction::Print, key("PRINT")),
        value(Instruction::Input, key("INPUT")),
    ))(input)
}
