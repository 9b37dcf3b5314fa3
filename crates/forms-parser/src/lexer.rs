//! Token level rules for the forms grammar.

use nom::{
    bytes::complete::tag,
    character::complete::{alpha0, char, digit1, multispace0},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, tuple},
    IResult,
};

/// Parse a non-negative number (integer or decimal).
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a number followed by an optional unit suffix, consuming all input.
pub fn number_with_unit(input: &str) -> IResult<&str, (f64, &str)> {
    all_consuming(pair(number, alpha0))(input)
}

/// Parse a parenthesized number, e.g. the `(0.5)` in `grow(0.5)`.
pub fn parenthesized_number(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(
        tuple((tag("("), multispace0)),
        number,
        tuple((multispace0, tag(")"))),
    ))(input)
}

/// Split at `separator` outside of `()` and `[]`, trimming each piece.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(input[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(input[start..].trim());

    parts
}

/// Strip a function style wrapper such as `max(...)`, returning the arguments.
pub fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}
