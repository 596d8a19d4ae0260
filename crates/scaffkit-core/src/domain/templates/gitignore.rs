use crate::domain::value_objects::PackageKind;

/// Ignore dependency installs, caches and build info; add the build output
/// only for kinds that have one.
pub(super) fn render(kind: PackageKind) -> String {
    let mut lines = vec!["node_modules/", ".turbo/"];

    if kind.has_build_step() {
        lines.push("dist/");
    }

    lines.extend(["*.tsbuildinfo", "coverage/"]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
