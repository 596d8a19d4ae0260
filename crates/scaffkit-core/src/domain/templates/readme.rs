use crate::domain::{conventions::WorkspaceConventions, request::ScaffoldRequest};

pub(super) fn render(request: &ScaffoldRequest, conventions: &WorkspaceConventions) -> String {
    let label = request.kind().label();
    let description = request
        .description()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("{label} for the monorepo."));

    format!(
        "# {title}

`{package}`

{description}

## Package Type

- {label}

## Usage

Replace this README with package-specific documentation once the API/export surface is defined.
",
        title = request.name().title(),
        package = conventions.package_name(request.name().as_str()),
    )
}
