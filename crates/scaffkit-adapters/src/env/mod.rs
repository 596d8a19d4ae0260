//! Layered `.env` loading.
//!
//! Files are read from one directory in increasing priority:
//!
//! 1. `.env`                  base values
//! 2. `.env.<environment>`    e.g. `.env.development`, `.env.production`
//! 3. `.env.local`            machine-local overrides
//!
//! The environment name comes from `NODE_ENV` (configurable) and defaults
//! to `development`. Missing files are skipped. Existing files are applied
//! to the process environment with override, so a later file beats an
//! earlier one and both beat variables exported by the shell. The merged
//! environment is then checked against an [`EnvSchema`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use scaffkit_core::domain::{EnvSchema, EnvValidationError, ValidatedEnv};
use thiserror::Error;
use tracing::{debug, instrument};

pub const DEFAULT_ENVIRONMENT_VAR: &str = "NODE_ENV";
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Error)]
pub enum EnvLoaderError {
    /// A file existed but could not be read or parsed.
    #[error("Failed to load {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error(transparent)]
    Validation(#[from] EnvValidationError),
}

/// Loads `.env` layers from a directory.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    dir: PathBuf,
    environment_var: String,
    default_environment: String,
}

impl EnvLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            environment_var: DEFAULT_ENVIRONMENT_VAR.into(),
            default_environment: DEFAULT_ENVIRONMENT.into(),
        }
    }

    /// Resolve the env directory from a source file inside it: the files
    /// live one level above the file's own directory (`app/src/main.rs`
    /// loads from `app/`).
    pub fn from_origin(origin: impl AsRef<Path>) -> Self {
        let dir = origin
            .as_ref()
            .parent()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    /// Variable that names the environment. Defaults to `NODE_ENV`.
    pub fn environment_var(mut self, key: impl Into<String>) -> Self {
        self.environment_var = key.into();
        self
    }

    /// Environment used when the selector variable is unset or empty.
    pub fn default_environment(mut self, name: impl Into<String>) -> Self {
        self.default_environment = name.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The active environment name.
    pub fn environment(&self) -> String {
        std::env::var(&self.environment_var)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.default_environment.clone())
    }

    /// Candidate files, lowest priority first, whether or not they exist.
    pub fn files(&self) -> Vec<PathBuf> {
        vec![
            self.dir.join(".env"),
            self.dir.join(format!(".env.{}", self.environment())),
            self.dir.join(".env.local"),
        ]
    }

    pub fn existing_files(&self) -> Vec<PathBuf> {
        self.files().into_iter().filter(|p| p.is_file()).collect()
    }

    /// Merge the files' key/value pairs without touching the process
    /// environment. Later files win.
    pub fn layered_values(&self) -> Result<BTreeMap<String, String>, EnvLoaderError> {
        let mut merged = BTreeMap::new();

        for path in self.existing_files() {
            let iter = dotenvy::from_path_iter(&path).map_err(|source| EnvLoaderError::File {
                path: path.clone(),
                source,
            })?;
            for item in iter {
                let (key, value) = item.map_err(|source| EnvLoaderError::File {
                    path: path.clone(),
                    source,
                })?;
                merged.insert(key, value);
            }
        }

        Ok(merged)
    }

    /// Apply every existing file to the process environment, in priority
    /// order, overriding what is already set. Returns the files applied.
    pub fn apply(&self) -> Result<Vec<PathBuf>, EnvLoaderError> {
        let files = self.existing_files();

        for path in &files {
            dotenvy::from_path_override(path).map_err(|source| EnvLoaderError::File {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), "Applied env file");
        }

        Ok(files)
    }

    /// Apply the layers, then validate the whole process environment.
    #[instrument(skip_all, fields(dir = %self.dir.display()))]
    pub fn load(&self, schema: &EnvSchema) -> Result<ValidatedEnv, EnvLoaderError> {
        let applied = self.apply()?;
        debug!(files = applied.len(), "Env layers applied");

        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        Ok(schema.validate(&vars)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scaffkit_core::domain::{EnvField, EnvRule};
    use std::fs;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn from_origin_goes_one_level_above_the_source_dir() {
        let loader = EnvLoader::from_origin("/apps/api/src/main.rs");
        assert_eq!(loader.dir(), Path::new("/apps/api"));
    }

    #[test]
    fn candidate_files_are_ordered_by_priority() {
        let loader = EnvLoader::new("/app")
            .environment_var("SCAFFKIT_TEST_UNSET_SELECTOR")
            .default_environment("production");
        assert_eq!(
            loader.files(),
            [
                PathBuf::from("/app/.env"),
                PathBuf::from("/app/.env.production"),
                PathBuf::from("/app/.env.local"),
            ]
        );
    }

    #[test]
    fn later_layers_override_earlier_ones() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), ".env", "A=base\nB=base\nC=base\n");
        write(temp.path(), ".env.development", "B=dev\nC=dev\n");
        write(temp.path(), ".env.local", "C=local\n");
        write(temp.path(), ".env.production", "A=prod\n");

        let loader = EnvLoader::new(temp.path()).environment_var("SCAFFKIT_TEST_UNSET_SELECTOR");
        let merged = loader.layered_values().unwrap();

        assert_eq!(merged["A"], "base");
        assert_eq!(merged["B"], "dev");
        assert_eq!(merged["C"], "local");
    }

    #[test]
    fn missing_files_are_skipped() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), ".env.local", "ONLY=local\n");

        let loader = EnvLoader::new(temp.path());
        assert_eq!(loader.existing_files().len(), 1);
        assert_eq!(loader.layered_values().unwrap()["ONLY"], "local");
    }

    #[test]
    fn load_applies_and_validates() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), ".env", "SCAFFKIT_LOADER_TEST_PORT=80\n");
        write(temp.path(), ".env.local", "SCAFFKIT_LOADER_TEST_PORT=8080\n");

        let schema = EnvSchema::new().field(EnvField::required(
            "SCAFFKIT_LOADER_TEST_PORT",
            EnvRule::Integer {
                min: Some(1),
                max: Some(65535),
            },
        ));
        let env = EnvLoader::new(temp.path())
            .environment_var("SCAFFKIT_TEST_UNSET_SELECTOR")
            .load(&schema)
            .unwrap();

        assert_eq!(env.get_parsed::<u16>("SCAFFKIT_LOADER_TEST_PORT"), Some(8080));
        assert_eq!(
            std::env::var("SCAFFKIT_LOADER_TEST_PORT").as_deref(),
            Ok("8080")
        );
    }

    #[test]
    fn load_reports_aggregate_validation_error() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), ".env", "SCAFFKIT_LOADER_TEST_MODE=loud\n");

        let schema = EnvSchema::new()
            .field(EnvField::required(
                "SCAFFKIT_LOADER_TEST_MODE",
                EnvRule::OneOf(vec!["quiet".into()]),
            ))
            .field(EnvField::required(
                "SCAFFKIT_LOADER_TEST_MISSING",
                EnvRule::NonEmpty,
            ));

        let err = EnvLoader::new(temp.path()).load(&schema).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Environment variable validation failed:"));
        assert!(message.contains("  SCAFFKIT_LOADER_TEST_MODE: "));
        assert!(message.contains("  SCAFFKIT_LOADER_TEST_MISSING: Required"));
    }

    #[test]
    fn malformed_file_names_the_path() {
        let temp = tempfile::tempdir().unwrap();
        write(temp.path(), ".env", "NOT VALID LINE\n");

        let err = EnvLoader::new(temp.path()).layered_values().unwrap_err();
        assert!(matches!(err, EnvLoaderError::File { .. }));
        assert!(err.to_string().contains(".env"));
    }
}
