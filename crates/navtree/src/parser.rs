//! A `nom`-based parser for generated navigation scripts.
use crate::error::{Location, NavTreeError};
use crate::manifest::Manifest;
use doxnav_types::{Children, NavEntry, NavTarget, ScriptName};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag, take_while, take_while_m_n},
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{map, map_res, opt, recognize, value, verify},
    error::ErrorKind,
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated},
};

/// Deepest level of inline children accepted. The top-level list is level 0.
pub const MAX_NESTING: usize = 64;

// --- Main Public Parsers ---

/// Parses a full `var name = [ ... ];` script.
pub fn parse_manifest(input: &str) -> Result<Manifest, NavTreeError> {
    finish(input, manifest(input))
}

/// Parses a bare bracketed list of triples, without the `var` header.
pub fn parse_entries(input: &str) -> Result<Vec<NavEntry>, NavTreeError> {
    finish(
        input,
        terminated(ws(|i| entry_list(i, 0)), opt(ws(char(';')))).parse(input),
    )
}

fn finish<T>(source: &str, result: IResult<&str, T>) -> Result<T, NavTreeError> {
    match result {
        Ok(("", value)) => Ok(value),
        Ok((rest, _)) => Err(NavTreeError::TrailingInput(Location::of_suffix(source, rest))),
        Err(nom::Err::Failure(e)) if e.code == ErrorKind::TooLarge => Err(NavTreeError::TooDeep {
            location: Location::of_suffix(source, e.input),
            limit: MAX_NESTING,
        }),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(NavTreeError::Syntax {
            message: format!("{:?} failed near '{}'", e.code, snippet(e.input)),
            location: Location::of_suffix(source, e.input),
        }),
        Err(nom::Err::Incomplete(needed)) => Err(NavTreeError::Incomplete(format!("{:?}", needed))),
    }
}

fn snippet(rest: &str) -> String {
    rest.chars().take(24).take_while(|c| *c != '\n').collect()
}

// --- Combinators ---

fn manifest(input: &str) -> IResult<&str, Manifest> {
    let (input, _) = preceded(multispace0, terminated(tag("var"), multispace1)).parse(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = ws(char('=')).parse(input)?;
    let (input, entries) = entry_list(input, 0)?;
    let (input, _) = opt(ws(char(';'))).parse(input)?;

    Ok((input, Manifest::new(name, entries)))
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"), tag("$"))),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
    ))
    .parse(input)
}

/// `[ triple, triple, ... ]`, a trailing comma allowed.
///
/// Lists nested past [`MAX_NESTING`] fail with `ErrorKind::TooLarge` instead
/// of recursing further.
fn entry_list(input: &str, depth: usize) -> IResult<&str, Vec<NavEntry>> {
    if depth > MAX_NESTING {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            ErrorKind::TooLarge,
        )));
    }
    delimited(
        ws(char('[')),
        terminated(
            separated_list0(ws(char(',')), |i| entry(i, depth)),
            opt(ws(char(','))),
        ),
        ws(char(']')),
    )
    .parse(input)
}

/// `[ "label", "target", children ]`
fn entry(input: &str, depth: usize) -> IResult<&str, NavEntry> {
    let (input, _) = ws(char('[')).parse(input)?;
    let (input, label) = ws(string_literal).parse(input)?;
    let (input, _) = char(',').parse(input)?;
    let (input, target) = ws(string_literal).parse(input)?;
    let (input, _) = char(',').parse(input)?;
    let (input, children) = ws(|i| children_slot(i, depth)).parse(input)?;
    let (input, _) = opt(ws(char(','))).parse(input)?;
    let (input, _) = ws(char(']')).parse(input)?;

    Ok((
        input,
        NavEntry {
            label,
            target: NavTarget::parse(&target),
            children,
        },
    ))
}

fn children_slot(input: &str, depth: usize) -> IResult<&str, Children> {
    alt((
        value(Children::None, tag("null")),
        map(string_literal, |s| Children::Deferred(ScriptName::from(s))),
        map(|i| entry_list(i, depth + 1), Children::Inline),
    ))
    .parse(input)
}

// --- String Literals ---

fn string_literal(input: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        map(
            opt(escaped_transform(is_not("\"\\"), '\\', escape_sequence)),
            Option::unwrap_or_default,
        ),
        char('"'),
    )
    .parse(input)
}

fn escape_sequence(input: &str) -> IResult<&str, char> {
    alt((
        value('"', char('"')),
        value('\\', char('\\')),
        value('/', char('/')),
        value('\'', char('\'')),
        value('\n', char('n')),
        value('\r', char('r')),
        value('\t', char('t')),
        unicode_escape,
    ))
    .parse(input)
}

fn hex4(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u32::from_str_radix(hex, 16),
    )
    .parse(input)
}

/// `uXXXX`, or a UTF-16 surrogate pair `uD83D\uDE00` combined into one char.
fn unicode_escape(input: &str) -> IResult<&str, char> {
    let (rest, unit) = preceded(char('u'), hex4).parse(input)?;
    let (rest, code) = if (0xD800..0xDC00).contains(&unit) {
        let (rest, low) = preceded(
            tag("\\u"),
            verify(hex4, |low: &u32| (0xDC00..0xE000).contains(low)),
        )
        .parse(rest)?;
        (rest, 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
    } else {
        (rest, unit)
    };
    match char::from_u32(code) {
        Some(c) => Ok((rest, c)),
        None => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Char))),
    }
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}
