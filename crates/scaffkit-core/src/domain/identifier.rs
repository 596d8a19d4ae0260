//! Package identifiers.
//!
//! An identifier is one or more runs of `[a-z0-9]` joined by single
//! hyphens: `logger`, `ui`, `commitlint-config`. Anything else is rejected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Returns `true` if `s` is a kebab-case identifier.
///
/// No empty segments are allowed, which rules out leading, trailing and
/// doubled hyphens in one check.
pub fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Title-case a kebab-case name: `my-cool-thing` becomes `My Cool Thing`.
pub fn title_case(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A validated package identifier.
///
/// Invariant: always satisfies [`is_valid_identifier`]. Enforced at
/// construction and on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        if is_valid_identifier(&s) {
            Ok(Self(s))
        } else {
            Err(DomainError::InvalidIdentifier { name: s })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn title(&self) -> String {
        title_case(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kebab_case() {
        for name in ["a", "logger", "ui", "commitlint-config", "v2", "a-b-c", "0-1"] {
            assert!(is_valid_identifier(name), "rejected: {name}");
        }
    }

    #[test]
    fn rejects_uppercase() {
        assert!(!is_valid_identifier("Logger"));
        assert!(!is_valid_identifier("my-Lib"));
    }

    #[test]
    fn rejects_underscores_and_other_symbols() {
        for name in ["bad_name", "my.lib", "a b", "@repo/x", "caf\u{e9}"] {
            assert!(!is_valid_identifier(name), "accepted: {name}");
        }
    }

    #[test]
    fn rejects_bad_hyphenation() {
        for name in ["", "-", "-lead", "trail-", "double--dash"] {
            assert!(!is_valid_identifier(name), "accepted: {name:?}");
        }
    }

    #[test]
    fn title_case_splits_on_hyphens() {
        assert_eq!(title_case("my-cool-thing"), "My Cool Thing");
        assert_eq!(title_case("ui"), "Ui");
        assert_eq!(title_case("v2-api"), "V2 Api");
    }

    #[test]
    fn identifier_parse_reports_the_name() {
        let err = Identifier::parse("bad_name").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidIdentifier {
                name: "bad_name".into()
            }
        );
        assert!(err.to_string().contains("Use kebab-case"));
    }

    #[test]
    fn identifier_deserialization_validates() {
        let ok: Identifier = serde_json::from_str("\"widgets\"").unwrap();
        assert_eq!(ok.as_str(), "widgets");
        assert!(serde_json::from_str::<Identifier>("\"Widgets\"").is_err());
    }
}
