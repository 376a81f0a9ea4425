use nom::bytes::complete::tag;
use nom::character::complete::multispace0;
use nom::sequence::preceded;
use thiserror::Error;

pub type Input<'a> = &'a str;
pub type Parsed<'a, O> = nom::IResult<Input<'a>, O, nom::error::VerboseError<Input<'a>>>;

/// A line of the listing or of the shell that doesn't parse as a whole
#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed {what}:\n{trace}")]
    Malformed { what: &'static str, trace: String },

    #[error("Unexpected {rest:?} after {what}")]
    Trailing { what: &'static str, rest: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn spaces(input: Input) -> Parsed<Input> {
    multispace0(input)
}

/// `word` after optional whitespace
pub fn key<'a>(word: &'static str) -> impl Fn(Input<'a>) -> Parsed<'a, Input<'a>> {
    preceded(spaces, tag(word))
}

/// Applies `parser` to the whole `input`; only whitespace may remain.
pub fn parse<'a, T, P>(what: &'static str, parser: P, input: Input<'a>) -> Result<T>
where
    P: Fn(Input<'a>) -> Parsed<'a, T>,
{
    let (rest, value) = parser(input).map_err(|e| {
        let trace = match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(input, e),
            nom::Err::Incomplete(_) => "more input needed".to_string(),
        };
        Error::Malformed { what, trace }
    })?;

    let rest = rest.trim();
    if !rest.is_empty() {
        return Err(Error::Trailing {
            what,
            rest: rest.to_string(),
        });
    }

    Ok(value)
}
