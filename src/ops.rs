use thiserror::Error;

use crate::types::Int;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Attempt to divide by 0")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arithmetic {
    Add,
    Sub,
    Mul,
    Div,
}

impl Arithmetic {
    pub fn apply(self, lhs: Int, rhs: Int) -> Result<Int, ArithmeticError> {
        let n = match self {
            Arithmetic::Add => lhs.wrapping_add(rhs),
            Arithmetic::Sub => lhs.wrapping_sub(rhs),
            Arithmetic::Mul => lhs.wrapping_mul(rhs),
            Arithmetic::Div => {
                if rhs == 0 {
                    return Err(ArithmeticError::DivisionByZero);
                }

                // truncates toward zero, i64::MIN / -1 wraps
                lhs.wrapping_div(rhs)
            }
        };

        Ok(n)
    }
}

// Order of variants is the COMPARE operand encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl Cmp {
    const ALL: [Cmp; 6] = [Cmp::Eq, Cmp::Ne, Cmp::Lt, Cmp::Gt, Cmp::Le, Cmp::Ge];

    pub fn code(self) -> Int {
        self as Int
    }

    pub fn from_code(code: Int) -> Option<Cmp> {
        if code < 0 {
            return None;
        }

        Self::ALL.get(code as usize).copied()
    }

    pub fn apply(self, lhs: Int, rhs: Int) -> bool {
        match self {
            Cmp::Eq => lhs == rhs,
            Cmp::Ne => lhs != rhs,
            Cmp::Lt => lhs < rhs,
            Cmp::Gt => lhs > rhs,
            Cmp::Le => lhs <= rhs,
            Cmp::Ge => lhs >= rhs,
        }
    }
}
