//! Core domain layer for Scaffkit.
//!
//! Pure business logic: identifiers, package kinds, requests, generated
//! file sets and the templates that fill them. No filesystem, no clock, no
//! environment access happens here.

pub mod conventions;
pub mod env_schema;
pub mod error;
pub mod file_set;
pub mod identifier;
pub mod request;
pub mod target;
pub mod templates;
pub mod value_objects;

mod validation;

pub use conventions::WorkspaceConventions;
pub use env_schema::{
    EnvField, EnvIssue, EnvRule, EnvSchema, EnvValidationError, ValidatedEnv,
};
pub use error::{DomainError, ErrorCategory};
pub use file_set::GeneratedFileSet;
pub use identifier::{Identifier, is_valid_identifier, title_case};
pub use request::ScaffoldRequest;
pub use target::TargetDirectory;
pub use templates::TemplateRegistry;
pub use validation::DomainValidator;
pub use value_objects::PackageKind;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_builds_typed_request() {
        let request =
            DomainValidator::validate_request("ui", "react-library", Some("Shared UI".into()))
                .unwrap();
        assert_eq!(request.name().as_str(), "ui");
        assert_eq!(request.kind(), PackageKind::ReactLibrary);
        assert_eq!(request.description(), Some("Shared UI"));
    }

    #[test]
    fn validator_checks_name_before_kind() {
        let err = DomainValidator::validate_request("Bad", "nope", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { .. }));
    }

    #[test]
    fn validator_rejects_unknown_kind() {
        let err = DomainValidator::validate_request("ok", "nope", None).unwrap_err();
        assert!(matches!(err, DomainError::UnknownPackageKind { .. }));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn empty_description_falls_back_to_default() {
        let request = DomainValidator::validate_request("ok", "node-lib", Some(String::new()))
            .unwrap();
        assert_eq!(request.description(), None);
    }
}
