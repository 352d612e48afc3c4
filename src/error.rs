use std::{fmt, io};

pub type Result<T> = std::result::Result<T, Error>;

/// What the input ran out before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Count,
    /// Zero-based `index` of the missing value out of `count`.
    Value { index: usize, count: usize },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expected::Count => write!(f, "the element count"),
            Expected::Value { index, count } => write!(f, "value {} of {}", index + 1, count),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed token `{token}` at position {position}: expected an integer")]
    InputFormat { token: String, position: usize },
    #[error("invalid element count {count}: expected a value in 0..={max}")]
    InvalidCount { count: i64, max: usize },
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEndOfInput(Expected),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn messages() {
        let err = Error::InputFormat {
            token: "two".to_string(),
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "malformed token `two` at position 3: expected an integer"
        );
        let err = Error::InvalidCount { count: -1, max: 20 };
        assert_eq!(
            err.to_string(),
            "invalid element count -1: expected a value in 0..=20"
        );
        let err = Error::UnexpectedEndOfInput(Expected::Count);
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading the element count"
        );
        let err = Error::UnexpectedEndOfInput(Expected::Value { index: 2, count: 3 });
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading value 3 of 3"
        );
    }
}
