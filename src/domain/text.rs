use std::{fmt, ops::Deref, str::FromStr};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// Maximum number of characters in a room name.
pub const ROOM_NAME_MAX: usize = 49;

/// Maximum number of characters in a suspect name.
pub const SUSPECT_NAME_MAX: usize = 49;

/// Maximum number of characters in a clue.
pub const CLUE_TEXT_MAX: usize = 99;

/// The name of a room in the mansion.
pub type RoomName = BoundedText<ROOM_NAME_MAX>;

/// The name of a suspect.
pub type SuspectName = BoundedText<SUSPECT_NAME_MAX>;

/// The text of a clue.
pub type ClueText = BoundedText<CLUE_TEXT_MAX>;

/// What to do with text that is longer than its limit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Refuse the text with [`TextError::TooLong`].
    #[default]
    Reject,
    /// Keep the first `MAX` characters.
    Truncate,
}

/// Errors raised when constructing a [`BoundedText`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The text was empty.
    #[error("text must not be empty")]
    Empty,

    /// The text exceeded the limit and the policy was [`OverflowPolicy::Reject`].
    #[error("'{text}' is {len} characters long, the limit is {max}")]
    TooLong {
        /// The rejected text.
        text: String,
        /// Its length in characters.
        len: usize,
        /// The limit it broke.
        max: usize,
    },
}

/// A non-empty string of at most `MAX` characters.
///
/// Length is counted in Unicode scalar values, so truncation always lands on
/// a character boundary. Ordering is byte-wise lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedText<const MAX: usize>(NonEmptyString);

impl<const MAX: usize> BoundedText<MAX> {
    /// The character limit for this type.
    pub const LIMIT: usize = MAX;

    /// Creates a new bounded text, rejecting anything over the limit.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for an empty string and
    /// [`TextError::TooLong`] when the text has more than `MAX` characters.
    pub fn new(text: impl Into<String>) -> Result<Self, TextError> {
        Self::with_policy(text, OverflowPolicy::Reject)
    }

    /// Creates a new bounded text, handling overflow according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for an empty string, and
    /// [`TextError::TooLong`] when the text is over the limit under
    /// [`OverflowPolicy::Reject`].
    pub fn with_policy(text: impl Into<String>, policy: OverflowPolicy) -> Result<Self, TextError> {
        let text = text.into();
        let len = text.chars().count();

        let text = if len <= MAX {
            text
        } else {
            match policy {
                OverflowPolicy::Reject => {
                    return Err(TextError::TooLong {
                        text,
                        len,
                        max: MAX,
                    });
                }
                OverflowPolicy::Truncate => {
                    tracing::debug!(len, max = MAX, "truncating text");
                    text.chars().take(MAX).collect()
                }
            }
        };

        NonEmptyString::new(text)
            .map(Self)
            .map_err(|_| TextError::Empty)
    }

    /// Returns the string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl<const MAX: usize> TryFrom<String> for BoundedText<MAX> {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const MAX: usize> TryFrom<&str> for BoundedText<MAX> {
    type Error = TextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const MAX: usize> FromStr for BoundedText<MAX> {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const MAX: usize> AsRef<str> for BoundedText<MAX> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<const MAX: usize> Deref for BoundedText<MAX> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const MAX: usize> fmt::Display for BoundedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl<const MAX: usize> Serialize for BoundedText<MAX> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    type Short = BoundedText<5>;

    #[test_case("abc", OverflowPolicy::Reject, "abc"; "short text is kept")]
    #[test_case("abcde", OverflowPolicy::Reject, "abcde"; "text at the limit is kept")]
    #[test_case("abcdefg", OverflowPolicy::Truncate, "abcde"; "long text is truncated")]
    #[test_case("ãéîõüç", OverflowPolicy::Truncate, "ãéîõü"; "truncation counts characters")]
    fn accepts(input: &str, policy: OverflowPolicy, expected: &str) {
        let text = Short::with_policy(input, policy).unwrap();
        assert_eq!(text.as_str(), expected);
    }

    #[test]
    fn rejects_long_text() {
        let error = Short::new("abcdef").unwrap_err();
        assert_eq!(
            error,
            TextError::TooLong {
                text: "abcdef".to_string(),
                len: 6,
                max: 5
            }
        );
    }

    #[test_case(OverflowPolicy::Reject; "reject")]
    #[test_case(OverflowPolicy::Truncate; "truncate")]
    fn rejects_empty_text(policy: OverflowPolicy) {
        assert_eq!(Short::with_policy("", policy).unwrap_err(), TextError::Empty);
    }

    #[test]
    fn orders_like_strcmp() {
        let upper = Short::new("Zed").unwrap();
        let lower = Short::new("abc").unwrap();
        assert!(upper < lower);
    }

    #[test]
    fn serializes_as_plain_string() {
        let text = ClueText::new("Pneu furado").unwrap();
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"Pneu furado\"");
    }
}
