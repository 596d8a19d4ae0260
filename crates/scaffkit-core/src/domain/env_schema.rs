//! Declarative validation for environment variables.
//!
//! The loader in `scaffkit-adapters` merges `.env` layers into a flat map;
//! this module decides whether that map is acceptable. Every field is
//! checked and every violation is reported, so a misconfigured environment
//! is fixed in one pass rather than one variable at a time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::identifier::is_valid_identifier;

/// What a variable's value must look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvRule {
    /// Anything, including the empty string.
    Any,
    NonEmpty,
    OneOf(Vec<String>),
    Integer { min: Option<i64>, max: Option<i64> },
    /// `true`/`false`/`1`/`0`/`yes`/`no`, case-insensitive.
    Boolean,
    /// Kebab-case identifier, same grammar as package names.
    Identifier,
}

impl EnvRule {
    fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Self::Any => Ok(()),
            Self::NonEmpty => {
                if value.is_empty() {
                    Err("Must not be empty".into())
                } else {
                    Ok(())
                }
            }
            Self::OneOf(options) => {
                if options.iter().any(|o| o == value) {
                    Ok(())
                } else {
                    Err(format!(
                        "Invalid value \"{value}\", expected one of: {}",
                        options.join(", ")
                    ))
                }
            }
            Self::Integer { min, max } => {
                let n: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Expected an integer, received \"{value}\""))?;
                if let Some(min) = min.filter(|min| n < *min) {
                    return Err(format!("Must be at least {min}"));
                }
                if let Some(max) = max.filter(|max| n > *max) {
                    return Err(format!("Must be at most {max}"));
                }
                Ok(())
            }
            Self::Boolean => parse_bool(value)
                .map(|_| ())
                .ok_or_else(|| format!("Expected a boolean, received \"{value}\"")),
            Self::Identifier => {
                if is_valid_identifier(value) {
                    Ok(())
                } else {
                    Err(format!("Expected a kebab-case identifier, received \"{value}\""))
                }
            }
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvField {
    key: String,
    rule: EnvRule,
    required: bool,
    default: Option<String>,
}

impl EnvField {
    pub fn required(key: impl Into<String>, rule: EnvRule) -> Self {
        Self {
            key: key.into(),
            rule,
            required: true,
            default: None,
        }
    }

    pub fn optional(key: impl Into<String>, rule: EnvRule) -> Self {
        Self {
            key: key.into(),
            rule,
            required: false,
            default: None,
        }
    }

    /// Value used when the variable is absent. Implies optional.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// A set of field rules validated together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSchema {
    fields: Vec<EnvField>,
}

impl EnvSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: EnvField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[EnvField] {
        &self.fields
    }

    /// Validate `vars`, returning only the schema's keys on success.
    pub fn validate(
        &self,
        vars: &BTreeMap<String, String>,
    ) -> Result<ValidatedEnv, EnvValidationError> {
        let mut values = BTreeMap::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            match vars.get(&field.key).or(field.default.as_ref()) {
                Some(value) => match field.rule.check(value) {
                    Ok(()) => {
                        values.insert(field.key.clone(), value.clone());
                    }
                    Err(message) => issues.push(EnvIssue {
                        path: field.key.clone(),
                        message,
                    }),
                },
                None if field.required => issues.push(EnvIssue {
                    path: field.key.clone(),
                    message: "Required".into(),
                }),
                None => {}
            }
        }

        if issues.is_empty() {
            Ok(ValidatedEnv { values })
        } else {
            Err(EnvValidationError { issues })
        }
    }
}

/// Environment values that passed their schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedEnv {
    values: BTreeMap<String, String>,
}

impl ValidatedEnv {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(parse_bool)
    }

    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.trim().parse().ok())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One violated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for EnvIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// Every field that failed, one line each.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Environment variable validation failed:\n{}", format_issues(.issues))]
pub struct EnvValidationError {
    pub issues: Vec<EnvIssue>,
}

fn format_issues(issues: &[EnvIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn schema() -> EnvSchema {
        EnvSchema::new()
            .field(EnvField::required("DATABASE_URL", EnvRule::NonEmpty))
            .field(EnvField::optional(
                "LOG_LEVEL",
                EnvRule::OneOf(vec!["debug".into(), "info".into()]),
            ))
            .field(
                EnvField::optional(
                    "PORT",
                    EnvRule::Integer {
                        min: Some(1),
                        max: Some(65535),
                    },
                )
                .with_default("3000"),
            )
    }

    #[test]
    fn valid_env_keeps_only_schema_keys() {
        let env = schema()
            .validate(&vars(&[("DATABASE_URL", "postgres://x"), ("HOME", "/root")]))
            .unwrap();
        assert_eq!(env.get("DATABASE_URL"), Some("postgres://x"));
        assert_eq!(env.get("HOME"), None);
        assert_eq!(env.get_parsed::<u16>("PORT"), Some(3000));
        assert_eq!(env.get("LOG_LEVEL"), None);
    }

    #[test]
    fn reports_every_violation() {
        let err = schema()
            .validate(&vars(&[("LOG_LEVEL", "loud"), ("PORT", "70000")]))
            .unwrap_err();

        let paths: Vec<_> = err.issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["DATABASE_URL", "LOG_LEVEL", "PORT"]);

        let message = err.to_string();
        assert!(message.starts_with("Environment variable validation failed:\n"));
        assert!(message.contains("  DATABASE_URL: Required"));
        assert!(message.contains("  PORT: Must be at most 65535"));
        assert_eq!(message.lines().count(), 4);
    }

    #[test]
    fn non_integer_is_rejected() {
        let err = schema()
            .validate(&vars(&[("DATABASE_URL", "x"), ("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.issues[0].message.contains("Expected an integer"));
    }

    #[test]
    fn boolean_rule_accepts_common_spellings() {
        let schema = EnvSchema::new().field(EnvField::required("FLAG", EnvRule::Boolean));
        for raw in ["true", "FALSE", "1", "0", "yes", "No"] {
            assert!(schema.validate(&vars(&[("FLAG", raw)])).is_ok(), "{raw}");
        }
        assert!(schema.validate(&vars(&[("FLAG", "maybe")])).is_err());

        let env = schema.validate(&vars(&[("FLAG", "yes")])).unwrap();
        assert_eq!(env.get_bool("FLAG"), Some(true));
    }

    #[test]
    fn identifier_rule_uses_package_grammar() {
        let schema = EnvSchema::new().field(EnvField::required("SCOPE", EnvRule::Identifier));
        assert!(schema.validate(&vars(&[("SCOPE", "acme")])).is_ok());
        assert!(schema.validate(&vars(&[("SCOPE", "Acme_Corp")])).is_err());
    }

    #[test]
    fn empty_string_passes_any_but_not_non_empty() {
        let schema = EnvSchema::new()
            .field(EnvField::required("A", EnvRule::Any))
            .field(EnvField::required("B", EnvRule::NonEmpty));
        let err = schema.validate(&vars(&[("A", ""), ("B", "")])).unwrap_err();
        assert_eq!(err.issues.len(), 1);
        assert_eq!(err.issues[0].path, "B");
    }
}
