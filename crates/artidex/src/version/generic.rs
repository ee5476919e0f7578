use serde::{Serialize, Serializer};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// GenericVersion
///
/// Lenient artifact version with a total ordering. Versions are sequences
/// of dot/hyphen separated tokens, with implicit splits at letter/digit
/// transitions. Numeric tokens compare numerically; qualifier tokens
/// compare by a well-known rank, then lexically and case-insensitively
/// among themselves. Shorter versions are padded with neutral tokens, so
/// `1.0` equals `1`, `1.0-alpha` precedes `1.0`, and `1.0` precedes
/// `1.0-sp`.
///
/// Equality follows the ordering, not the raw text: two spellings of the
/// same version compare equal even when their strings differ.
///

#[derive(Clone, Debug)]
pub struct GenericVersion {
    raw: String,
    tokens: Vec<Token>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Token {
    Number(u64),
    Qualifier(String),
}

/// Rank of a qualifier among the well-known pre-release and patch markers.
/// Release (the absent token) sits between `snapshot` and `sp`; unknown
/// qualifiers sort after every well-known one.
fn qualifier_rank(qualifier: &str) -> u8 {
    match qualifier {
        "alpha" => 0,
        "beta" => 1,
        "milestone" => 2,
        "rc" | "cr" => 3,
        "snapshot" => 4,
        "" => RELEASE_RANK,
        "sp" => 6,
        _ => UNKNOWN_RANK,
    }
}

const RELEASE_RANK: u8 = 5;
const UNKNOWN_RANK: u8 = 7;

impl Token {
    // Total order over tokens, treating `None` as the neutral padding
    // token: zero against numbers, release against qualifiers.
    fn compare(left: Option<&Self>, right: Option<&Self>) -> Ordering {
        match (left, right) {
            (None, None) => Ordering::Equal,

            (Some(Self::Number(l)), Some(Self::Number(r))) => l.cmp(r),
            (Some(Self::Number(l)), None) => l.cmp(&0),
            (None, Some(Self::Number(r))) => 0.cmp(r),

            // Numbers always outrank qualifiers.
            (Some(Self::Number(_)), Some(Self::Qualifier(_))) => Ordering::Greater,
            (Some(Self::Qualifier(_)), Some(Self::Number(_))) => Ordering::Less,

            (Some(Self::Qualifier(l)), Some(Self::Qualifier(r))) => {
                qualifier_rank(l).cmp(&qualifier_rank(r)).then_with(|| {
                    if qualifier_rank(l) == UNKNOWN_RANK {
                        l.cmp(r)
                    } else {
                        Ordering::Equal
                    }
                })
            }
            (Some(Self::Qualifier(l)), None) => qualifier_rank(l).cmp(&RELEASE_RANK),
            (None, Some(Self::Qualifier(r))) => RELEASE_RANK.cmp(&qualifier_rank(r)),
        }
    }
}

impl GenericVersion {
    /// The version string as supplied by the caller.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for separated in input.split(['.', '-']) {
            // Implicit split at every letter/digit transition.
            let mut rest = separated;
            while !rest.is_empty() {
                let digit = rest.starts_with(|c: char| c.is_ascii_digit());
                let run = rest
                    .find(|c: char| c.is_ascii_digit() != digit)
                    .unwrap_or(rest.len());
                let (token, tail) = rest.split_at(run);

                if digit {
                    // Oversized numeric runs fall through as qualifiers and
                    // surface as a parse failure below.
                    match token.parse::<u64>() {
                        Ok(number) => tokens.push(Token::Number(number)),
                        Err(_) => tokens.push(Token::Qualifier(token.to_lowercase())),
                    }
                } else {
                    tokens.push(Token::Qualifier(token.to_lowercase()));
                }

                rest = tail;
            }
        }

        tokens
    }
}

impl FromStr for GenericVersion {
    type Err = VersionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VersionError::Empty);
        }

        let tokens = Self::tokenize(trimmed);
        if !tokens.iter().any(|token| matches!(token, Token::Number(_))) {
            return Err(VersionError::Unparseable {
                input: input.to_string(),
            });
        }

        Ok(Self {
            raw: trimmed.to_string(),
            tokens,
        })
    }
}

impl Ord for GenericVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let positions = self.tokens.len().max(other.tokens.len());

        for position in 0..positions {
            let ordering = Token::compare(self.tokens.get(position), other.tokens.get(position));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for GenericVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GenericVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GenericVersion {}

impl fmt::Display for GenericVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// Serialized as the raw string for diagnostics; versions never deserialize
// back, they re-enter through `FromStr` so the grammar is enforced.
impl Serialize for GenericVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

///
/// VersionError
/// Usage errors for version bounds and parsing.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum VersionError {
    /// Checked before any parsing is attempted.
    #[error("version string cannot be empty")]
    Empty,

    /// The string has no numeric token under the lenient grammar.
    #[error("version string is not parseable: '{input}'")]
    Unparseable { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(input: &str) -> GenericVersion {
        input.parse().unwrap()
    }

    #[test]
    fn numeric_segments_compare_numerically() {
        assert!(version("2.19.0") < version("2.20.0"));
        assert!(version("14.0.1") < version("20.0"));
        assert!(version("20.0") < version("27.0.1"));
        assert!(version("1.9") < version("1.10"));
    }

    #[test]
    fn shorter_versions_are_padded_neutrally() {
        assert_eq!(version("1.0"), version("1"));
        assert_eq!(version("1.0.0"), version("1"));
        assert!(version("1.0.1") > version("1"));
    }

    #[test]
    fn qualifier_ranks_straddle_the_release() {
        assert!(version("1.0-alpha") < version("1.0-beta"));
        assert!(version("1.0-beta") < version("1.0-milestone"));
        assert!(version("1.0-milestone") < version("1.0-rc"));
        assert!(version("1.0-rc") < version("1.0-snapshot"));
        assert!(version("1.0-snapshot") < version("1.0"));
        assert!(version("1.0") < version("1.0-sp"));
        assert!(version("1.0-sp") < version("1.0-whatever"));
    }

    #[test]
    fn unknown_qualifiers_order_lexically() {
        assert!(version("1.0-aardvark") < version("1.0-zebra"));
        assert_eq!(version("1.0-FINAL2"), version("1.0-final2"));
    }

    #[test]
    fn numbers_outrank_qualifiers() {
        assert!(version("1.0-sp") < version("1.0.1"));
        assert!(version("1.0-1") > version("1.0-sp"));
    }

    #[test]
    fn letter_digit_transitions_split_tokens() {
        assert_eq!(version("1.0a1"), version("1.0-a-1"));
        assert!(version("2.0rc1") < version("2.0rc2"));
    }

    #[test]
    fn empty_and_qualifier_only_strings_fail() {
        assert_eq!("".parse::<GenericVersion>(), Err(VersionError::Empty));
        assert_eq!("   ".parse::<GenericVersion>(), Err(VersionError::Empty));
        assert_eq!(
            "final".parse::<GenericVersion>(),
            Err(VersionError::Unparseable {
                input: "final".to_string()
            })
        );
    }

    #[test]
    fn display_round_trips_the_raw_string() {
        assert_eq!(version("14.0.1").to_string(), "14.0.1");
        assert_eq!(version("1.0-SNAPSHOT").to_string(), "1.0-SNAPSHOT");
    }
}
