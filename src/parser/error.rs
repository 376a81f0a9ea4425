use std::fmt;

use thiserror::Error;

use crate::scanner::TokenKind;
use crate::types::Int;

/// Construct that was required but not found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Statement,
    Expression,
    Number,
    Comparison,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construct::Statement => "statement",
            Construct::Expression => "expression",
            Construct::Number => "number",
            Construct::Comparison => "comparison operation",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("Line {line}: {found} found while {expected} expected.")]
    Unexpected {
        line: usize,
        found: TokenKind,
        expected: TokenKind,
    },

    #[error("Line {line}: {what} expected.")]
    Expected { line: usize, what: Construct },

    #[error("Line {line}: unique constant after 'case' expected, {value} is already used.")]
    DuplicateCase { line: usize, value: Int },
}

/// Every diagnostic of a failed translation, in source order
#[derive(Debug, PartialEq, Eq)]
pub struct CompileError {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }

        Ok(())
    }
}

impl std::error::Error for CompileError {}
