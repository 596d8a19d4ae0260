use serde::{Deserialize, Serialize};

use crate::domain::{identifier::Identifier, value_objects::PackageKind};

/// A fully validated scaffolding request.
///
/// Both invariants (kebab-case name, closed kind set) hold by construction
/// because the fields are already typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldRequest {
    name: Identifier,
    kind: PackageKind,
    description: Option<String>,
}

impl ScaffoldRequest {
    pub fn new(name: Identifier, kind: PackageKind, description: Option<String>) -> Self {
        Self {
            name,
            kind,
            // An empty description means "use the default sentence".
            description: description.filter(|d| !d.is_empty()),
        }
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
