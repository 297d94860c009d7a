use std::fmt;
use thiserror::Error;

/// Line and column (both 1-based) of a position in a navigation script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub col: usize,
}

impl Location {
    /// Locates `rest`, a suffix of `source`, within `source`.
    pub fn of_suffix(source: &str, rest: &str) -> Self {
        let offset = source.len().saturating_sub(rest.len());
        let consumed = &source[..offset];
        let line = consumed.matches('\n').count() + 1;
        let col = match consumed.rfind('\n') {
            Some(nl) => consumed[nl + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        Self { line, col }
    }
}

impl From<(usize, usize)> for Location {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.col)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavTreeError {
    #[error("Syntax error at {location}: {message}")]
    Syntax { message: String, location: Location },

    #[error("Unexpected input after the closing bracket at {0}")]
    TrailingInput(Location),

    #[error("Children nested deeper than {limit} levels at {location}")]
    TooDeep { location: Location, limit: usize },

    #[error("Incomplete navigation script: {0}")]
    Incomplete(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_of_suffix() {
        let source = "var x =\n[\n  oops";
        let rest = &source[source.find("oops").unwrap()..];
        assert_eq!(Location::of_suffix(source, rest), Location::from((3, 3)));
    }

    #[test]
    fn test_location_at_start() {
        let source = "abc";
        assert_eq!(Location::of_suffix(source, source), Location::from((1, 1)));
    }
}
