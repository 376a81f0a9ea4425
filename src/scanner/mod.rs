mod token;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, take_while, take_while1};
use nom::character::complete::{digit1, multispace1};
use nom::combinator::{map, recognize, value};
use nom::multi::many0;
use nom::sequence::{delimited, pair};

pub use self::token::{Token, TokenKind};
use crate::nom::{Input, Parsed};
use crate::ops::{Arithmetic, Cmp};
use crate::types::Int;

/// Stream of tokens with one token of lookahead.
pub trait TokenSource {
    /// Moves to the next token. Stays at `Token::Eof` once reached.
    fn advance(&mut self);

    fn token(&self) -> &Token;

    /// Source line of the current token, starting at 1
    fn line(&self) -> usize;
}

pub struct Scanner<'a> {
    rest: Input<'a>,
    line: usize,
    token: Token,
    token_line: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: Input<'a>) -> Self {
        let mut scanner = Scanner {
            rest: source,
            line: 1,
            token: Token::Eof,
            token_line: 1,
        };

        scanner.advance();
        scanner
    }

    /// All tokens up to end of file, with their lines
    pub fn tokenize(source: Input<'a>) -> Vec<(usize, Token)> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();

        while scanner.token != Token::Eof {
            tokens.push((scanner.token_line, scanner.token.clone()));
            scanner.advance();
        }

        tokens
    }

    fn skip_blanks(&mut self) {
        if let Ok((rest, skipped)) = blanks(self.rest) {
            self.line += newlines(skipped);
            self.rest = rest;
        }

        // unterminated comment swallows the rest of the input
        if self.rest.starts_with("/*") {
            self.line += newlines(self.rest);
            self.rest = "";
        }
    }
}

impl TokenSource for Scanner<'_> {
    fn advance(&mut self) {
        self.skip_blanks();
        self.token_line = self.line;

        if self.rest.is_empty() {
            self.token = Token::Eof;
            return;
        }

        let (rest, token) = match lex(self.rest) {
            Ok(lexed) => lexed,
            Err(_) => {
                let mut chars = self.rest.chars();
                chars.next();
                (chars.as_str(), Token::Illegal)
            }
        };

        self.rest = rest;
        self.token = token;
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn line(&self) -> usize {
        self.token_line
    }
}

fn newlines(s: &str) -> usize {
    s.matches('\n').count()
}

fn comment(input: Input) -> Parsed<Input> {
    recognize(delimited(tag("/*"), take_until("*/"), tag("*/")))(input)
}

fn blanks(input: Input) -> Parsed<Input> {
    recognize(many0(alt((multispace1, comment))))(input)
}

fn lex(input: Input) -> Parsed<Token> {
    alt((number, word, punctuation))(input)
}

fn number(input: Input) -> Parsed<Token> {
    // literals that do not fit into Int are rejected as illegal
    map(digit1, |digits: Input| {
        digits
            .parse::<Int>()
            .map(Token::Number)
            .unwrap_or(Token::Illegal)
    })(input)
}

fn word(input: Input) -> Parsed<Token> {
    map(
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic()),
            take_while(|c: char| c.is_ascii_alphanumeric()),
        )),
        |word: Input| Token::word(&word.to_ascii_lowercase()),
    )(input)
}

fn punctuation(input: Input) -> Parsed<Token> {
    alt((
        value(Token::Assign, tag(":=")),
        value(Token::Colon, tag(":")),
        value(Token::Cmp(Cmp::Le), tag("<=")),
        value(Token::Cmp(Cmp::Lt), tag("<")),
        value(Token::Cmp(Cmp::Ge), tag(">=")),
        value(Token::Cmp(Cmp::Gt), tag(">")),
        value(Token::Cmp(Cmp::Ne), tag("!=")),
        value(Token::Cmp(Cmp::Eq), tag("=")),
        value(Token::AddOp(Arithmetic::Add), tag("+")),
        value(Token::AddOp(Arithmetic::Sub), tag("-")),
        value(Token::MulOp(Arithmetic::Mul), tag("*")),
        value(Token::MulOp(Arithmetic::Div), tag("/")),
        value(Token::LParen, tag("(")),
        value(Token::RParen, tag(")")),
        value(Token::Semicolon, tag(";")),
    ))(input)
}
