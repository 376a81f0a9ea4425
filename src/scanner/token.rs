use std::fmt;

use crate::ops::{Arithmetic, Cmp};
use crate::types::{Int, Var};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Eof,
    Illegal,
    Identifier(Var),
    Number(Int),
    Begin,
    End,
    If,
    Then,
    Else,
    Fi,
    While,
    Do,
    Od,
    Write,
    Read,
    Assign,
    AddOp(Arithmetic),
    MulOp(Arithmetic),
    Cmp(Cmp),
    LParen,
    RParen,
    Semicolon,
    Loop,
    EndLoop,
    Switch,
    Break,
    Case,
    Default,
    EndSwitch,
    Colon,
}

/// Token without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Illegal,
    Identifier,
    Number,
    Begin,
    End,
    If,
    Then,
    Else,
    Fi,
    While,
    Do,
    Od,
    Write,
    Read,
    Assign,
    AddOp,
    MulOp,
    Cmp,
    LParen,
    RParen,
    Semicolon,
    Loop,
    EndLoop,
    Switch,
    Break,
    Case,
    Default,
    EndSwitch,
    Colon,
}

impl Token {
    /// Keyword for an (already lower-cased) word, identifier otherwise.
    pub fn word(word: &str) -> Token {
        match word {
            "begin" => Token::Begin,
            "end" => Token::End,
            "if" => Token::If,
            "then" => Token::Then,
            "else" => Token::Else,
            "fi" => Token::Fi,
            "while" => Token::While,
            "do" => Token::Do,
            "od" => Token::Od,
            "write" => Token::Write,
            "read" => Token::Read,
            "loop" => Token::Loop,
            "endloop" => Token::EndLoop,
            "switch" => Token::Switch,
            "break" => Token::Break,
            "case" => Token::Case,
            "default" => Token::Default,
            "endswitch" => Token::EndSwitch,
            _ => Token::Identifier(word.into()),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Illegal => TokenKind::Illegal,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Number(_) => TokenKind::Number,
            Token::Begin => TokenKind::Begin,
            Token::End => TokenKind::End,
            Token::If => TokenKind::If,
            Token::Then => TokenKind::Then,
            Token::Else => TokenKind::Else,
            Token::Fi => TokenKind::Fi,
            Token::While => TokenKind::While,
            Token::Do => TokenKind::Do,
            Token::Od => TokenKind::Od,
            Token::Write => TokenKind::Write,
            Token::Read => TokenKind::Read,
            Token::Assign => TokenKind::Assign,
            Token::AddOp(_) => TokenKind::AddOp,
            Token::MulOp(_) => TokenKind::MulOp,
            Token::Cmp(_) => TokenKind::Cmp,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Semicolon => TokenKind::Semicolon,
            Token::Loop => TokenKind::Loop,
            Token::EndLoop => TokenKind::EndLoop,
            Token::Switch => TokenKind::Switch,
            Token::Break => TokenKind::Break,
            Token::Case => TokenKind::Case,
            Token::Default => TokenKind::Default,
            Token::EndSwitch => TokenKind::EndSwitch,
            Token::Colon => TokenKind::Colon,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "end of file",
            TokenKind::Illegal => "illegal token",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Begin => "'BEGIN'",
            TokenKind::End => "'END'",
            TokenKind::If => "'IF'",
            TokenKind::Then => "'THEN'",
            TokenKind::Else => "'ELSE'",
            TokenKind::Fi => "'FI'",
            TokenKind::While => "'WHILE'",
            TokenKind::Do => "'DO'",
            TokenKind::Od => "'OD'",
            TokenKind::Write => "'WRITE'",
            TokenKind::Read => "'READ'",
            TokenKind::Assign => "':='",
            TokenKind::AddOp => "'+' or '-'",
            TokenKind::MulOp => "'*' or '/'",
            TokenKind::Cmp => "comparison operation",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Semicolon => "';'",
            TokenKind::Loop => "'LOOP'",
            TokenKind::EndLoop => "'ENDLOOP'",
            TokenKind::Switch => "'SWITCH'",
            TokenKind::Break => "'BREAK'",
            TokenKind::Case => "'CASE'",
            TokenKind::Default => "'DEFAULT'",
            TokenKind::EndSwitch => "'ENDSWITCH'",
            TokenKind::Colon => "':'",
        };

        f.write_str(name)
    }
}
