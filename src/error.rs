use std::io;
use thiserror::Error;

/// Why a dotted-quad string was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("wrong octet count: expected 4, found {found}")]
    WrongOctetCount { found: usize },
    #[error("not a number: {segment:?}")]
    NotANumber { segment: String },
    #[error("out of range: {segment} (expected 0-255)")]
    OutOfRange { segment: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            "wrong octet count: expected 4, found 3",
            FormatError::WrongOctetCount { found: 3 }.to_string()
        );
        assert_eq!(
            "not a number: \"a\"",
            FormatError::NotANumber {
                segment: "a".to_owned()
            }
            .to_string()
        );
        assert_eq!(
            "line 7: out of range: 256 (expected 0-255)",
            Error::Format {
                line: 7,
                source: FormatError::OutOfRange {
                    segment: "256".to_owned()
                }
            }
            .to_string()
        );
    }
}
