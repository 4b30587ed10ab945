//! Tokenizers feeding the token-level measures.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sm_types::SimError;

pub const DEFAULT_Q: usize = 2;
pub const DEFAULT_DELIMITER: &str = " ";

/// All contiguous windows of `q` chars, in order.
///
/// Strings shorter than `q` have no q-grams.
pub fn qgram(s: &str, q: usize) -> Result<Vec<String>, SimError> {
    if q == 0 {
        return Err(SimError::InvalidParams("q-gram size must be positive".into()));
    }
    let chars = s.chars().collect_vec();
    Ok(chars.windows(q).map(|w| w.iter().collect()).collect())
}

/// Split on the exact string `delim`.
///
/// Empty pieces are kept: adjacent delimiters yield an empty token, and the
/// empty string is a single empty token.
pub fn delimiter(s: &str, delim: &str) -> Result<Vec<String>, SimError> {
    if delim.is_empty() {
        return Err(SimError::InvalidParams("delimiter must not be empty".into()));
    }
    Ok(s.split(delim).map(str::to_owned).collect())
}

/// Split on runs of whitespace.
pub fn whitespace(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_owned).collect()
}

/// How the token-level measures split their input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenizer {
    Whitespace,
    Delimiter(String),
    Qgram(usize),
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::Whitespace
    }
}

impl Tokenizer {
    pub fn tokenize(&self, s: &str) -> Result<Vec<String>, SimError> {
        match self {
            Tokenizer::Whitespace => Ok(whitespace(s)),
            Tokenizer::Delimiter(d) => delimiter(s, d),
            Tokenizer::Qgram(q) => qgram(s, *q),
        }
    }
}

impl std::str::FromStr for Tokenizer {
    type Err = SimError;

    /// Parses `whitespace`, `delimiter[:<d>]` or `qgram[:<q>]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "whitespace" => Ok(Tokenizer::Whitespace),
            None if s == "delimiter" => Ok(Tokenizer::Delimiter(DEFAULT_DELIMITER.to_owned())),
            None if s == "qgram" => Ok(Tokenizer::Qgram(DEFAULT_Q)),
            Some(("delimiter", d)) => Ok(Tokenizer::Delimiter(d.to_owned())),
            Some(("qgram", q)) => q
                .parse()
                .map(Tokenizer::Qgram)
                .map_err(|_| SimError::InvalidParams(format!("invalid q-gram size {q:?}"))),
            _ => Err(SimError::InvalidParams(format!("unknown tokenizer {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qgrams() {
        assert_eq!(qgram("", 2).unwrap(), Vec::<String>::new());
        assert_eq!(qgram("a", 2).unwrap(), Vec::<String>::new());
        assert_eq!(qgram("aa", 2).unwrap(), ["aa"]);
        assert_eq!(
            qgram("database", 2).unwrap(),
            ["da", "at", "ta", "ab", "ba", "as", "se"]
        );
        assert_eq!(qgram("d", 1).unwrap(), ["d"]);
        assert_eq!(
            qgram("database", 3).unwrap(),
            ["dat", "ata", "tab", "aba", "bas", "ase"]
        );
        assert!(qgram("abc", 0).is_err());
    }

    #[test]
    fn delimiters() {
        assert_eq!(delimiter("data science", " ").unwrap(), ["data", "science"]);
        assert_eq!(delimiter("data,science", ",").unwrap(), ["data", "science"]);
        assert_eq!(delimiter("data science", ",").unwrap(), ["data science"]);
        assert_eq!(delimiter("data$#$science", "$#$").unwrap(), ["data", "science"]);
        assert!(delimiter("data", "").is_err());

        assert_eq!(delimiter("data  science", " ").unwrap(), ["data", "", "science"]);
        assert_eq!(delimiter(",data,", ",").unwrap(), ["", "data", ""]);
        assert_eq!(delimiter("", " ").unwrap(), [""]);
    }

    #[test]
    fn whitespaces() {
        for s in [
            "data science",
            "data        science",
            "data   science",
            "data\tscience",
            "data\nscience",
        ] {
            assert_eq!(whitespace(s), ["data", "science"]);
        }
        assert!(whitespace("").is_empty());
    }

    #[test]
    fn parse_tokenizer() {
        assert_eq!("whitespace".parse(), Ok(Tokenizer::Whitespace));
        assert_eq!("qgram:3".parse(), Ok(Tokenizer::Qgram(3)));
        assert_eq!("qgram".parse(), Ok(Tokenizer::Qgram(2)));
        assert_eq!("delimiter".parse(), Ok(Tokenizer::Delimiter(" ".into())));
        assert_eq!("delimiter:,".parse(), Ok(Tokenizer::Delimiter(",".into())));
        assert!("qgram:x".parse::<Tokenizer>().is_err());
        assert!("words".parse::<Tokenizer>().is_err());
    }
}
