use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseSequenceError {
    #[error("sequence has an unmatched '[' or ']'")]
    UnbalancedBrackets,
    #[error("element {position} ('{token}') is not a valid integer")]
    InvalidInteger {
        position: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

type Error = ParseSequenceError;
type Result<T> = std::result::Result<T, Error>;

/// Parses a sequence such as `[0, -1, 2]` or `0 -1 2`.
///
/// Brackets are optional, elements are separated by commas and/or whitespace.
pub fn parse_sequence(s: &str) -> Result<Vec<i32>> {
    let s = s.trim();

    let inner = match (s.strip_prefix('['), s.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => s,
        _ => return Err(Error::UnbalancedBrackets),
    };

    if inner.contains(['[', ']']) {
        return Err(Error::UnbalancedBrackets);
    }

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|source| Error::InvalidInteger {
                position,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracketed() {
        assert_eq!(parse_sequence("[0, -1, 2, -3, 1]").unwrap(), vec![0, -1, 2, -3, 1]);
    }

    #[test]
    fn bare_whitespace_and_commas() {
        assert_eq!(parse_sequence("  0 -1,2 ,  -3  1 ").unwrap(), vec![0, -1, 2, -3, 1]);
    }

    #[test]
    fn empty() {
        assert_eq!(parse_sequence("").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_sequence("[]").unwrap(), Vec::<i32>::new());
        assert_eq!(parse_sequence(" [ ] ").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn unbalanced() {
        assert_eq!(parse_sequence("[1, 2"), Err(Error::UnbalancedBrackets));
        assert_eq!(parse_sequence("1, 2]"), Err(Error::UnbalancedBrackets));
        assert_eq!(parse_sequence("[[1]]"), Err(Error::UnbalancedBrackets));
    }

    #[test]
    fn invalid_integer() {
        let err = parse_sequence("[1, x, 3]").unwrap_err();
        match err {
            Error::InvalidInteger { position, ref token, .. } => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            }
            _ => panic!("unexpected error: {err:?}"),
        }
        assert_eq!(err.to_string(), "element 1 ('x') is not a valid integer");
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            parse_sequence("2147483648"),
            Err(Error::InvalidInteger { position: 0, .. })
        ));
        assert_eq!(parse_sequence("-2147483648").unwrap(), vec![i32::MIN]);
    }
}
