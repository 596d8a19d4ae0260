//! Domain value objects: PackageKind.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and its `as_str` arm here
//! 2. Add it to [`PackageKind::ALL`]
//! 3. Let the compiler point at every generator `match` that needs an arm

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The kind of workspace package to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    /// TypeScript library compiled with `tsc` for Node consumers.
    #[default]
    NodeLib,
    /// TypeScript library built against the React base config.
    ReactLibrary,
    /// Plain JavaScript package with no build step.
    ConfigOnly,
}

impl PackageKind {
    pub const ALL: [PackageKind; 3] = [Self::NodeLib, Self::ReactLibrary, Self::ConfigOnly];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NodeLib => "node-lib",
            Self::ReactLibrary => "react-library",
            Self::ConfigOnly => "config-only",
        }
    }

    /// Whether the package compiles TypeScript into `dist/`.
    pub const fn has_build_step(self) -> bool {
        !matches!(self, Self::ConfigOnly)
    }

    /// Human label used in READMEs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NodeLib => "Node library",
            Self::ReactLibrary => "React library",
            Self::ConfigOnly => "config-only package",
        }
    }

    /// Comma-separated list of every accepted spelling.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKind {
    type Err = DomainError;

    /// Exact match only; `Node-Lib` is not a package kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownPackageKind {
                value: s.to_string(),
                valid: Self::valid_values(),
            })
    }
}
