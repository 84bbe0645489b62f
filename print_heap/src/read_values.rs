use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, multispace0},
    combinator::{map_res, opt, recognize},
    sequence::preceded,
};
use num::Signed;

pub const PROMPT: &str = "insert set of integers: ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Values<IntT> {
    pub values: Vec<IntT>,
    /// Non-empty tokens without a leading integer, in input order.
    pub rejected: Vec<String>,
}

/// Prompts on `output` and reads lines from `input` until a non-empty one
/// arrives. `None` at end of input.
pub fn read_line(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<Option<String>> {
    let mut line = String::default();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        let bytes = input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
}

/// Splits `line` on single spaces and keeps the leading integer of every
/// token. A token that does not start with an integer, or whose integer
/// overflows `IntT`, is rejected on its own; empty tokens are ignored.
pub fn parse_values<IntT: Signed + FromStr>(line: &str) -> Values<IntT> {
    let mut values = Vec::default();
    let mut rejected = Vec::default();
    for token in line.split(' ').filter(|token| !token.is_empty()) {
        match leading_integer(token) {
            Ok((_, value)) => values.push(value),
            Err(_) => rejected.push(token.to_string()),
        }
    }
    return Values { values, rejected };
}

fn leading_integer<IntT: Signed + FromStr>(input: &str) -> IResult<&str, IntT> {
    // <token> ::= <whitespace>* <integer> <any_sequence_of_characters>
    preceded(multispace0, integer).parse(input)
}

fn integer<IntT: Signed + FromStr>(input: &str) -> IResult<&str, IntT> {
    // <integer> ::= ["+" | "-"] <digit>+
    map_res(
        recognize((opt(alt((tag("+"), tag("-")))), digit1)),
        str::parse,
    )
    .parse(input)
}
