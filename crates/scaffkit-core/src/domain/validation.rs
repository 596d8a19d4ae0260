use crate::domain::{
    error::DomainError, identifier::Identifier, request::ScaffoldRequest,
    value_objects::PackageKind,
};

/// Centralized domain validation.
///
/// Turns raw strings into a typed [`ScaffoldRequest`]. The name is checked
/// before the kind so the first reported problem matches the order the
/// user typed them in.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(
        name: &str,
        kind: &str,
        description: Option<String>,
    ) -> Result<ScaffoldRequest, DomainError> {
        let name = Identifier::parse(name)?;
        let kind = kind.parse::<PackageKind>()?;
        Ok(ScaffoldRequest::new(name, kind, description))
    }
}
