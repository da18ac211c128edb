use std::fs;
use std::path::Path;

use affirm_core::errors::{AffirmError, ErrorInfo};

use crate::manifest::RegistryManifest;
use crate::static_registry::StaticRegistry;

fn parse_error(message: String) -> AffirmError {
    AffirmError::Usage(ErrorInfo::new("affirm_registry.parse_manifest", message))
}

/// Parses and validates a TOML manifest.
pub fn parse_toml_manifest(contents: &str) -> Result<RegistryManifest, AffirmError> {
    let manifest: RegistryManifest =
        toml::from_str(contents).map_err(|err| parse_error(err.to_string()))?;
    manifest.validate()?;
    Ok(manifest)
}

/// Parses and validates a JSON manifest.
pub fn parse_json_manifest(contents: &str) -> Result<RegistryManifest, AffirmError> {
    let manifest: RegistryManifest =
        serde_json::from_str(contents).map_err(|err| parse_error(err.to_string()))?;
    manifest.validate()?;
    Ok(manifest)
}

/// Reads a manifest from disk; `.json` files are parsed as JSON, everything else as TOML.
pub fn load_registry_manifest(path: &Path) -> Result<RegistryManifest, AffirmError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        AffirmError::Usage(
            ErrorInfo::new(
                "affirm_registry.read_manifest",
                format!("failed to read manifest: {err}"),
            )
            .with_context("path", path.display().to_string()),
        )
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        parse_json_manifest(&contents)
    } else {
        parse_toml_manifest(&contents)
    };
    let manifest = parsed.map_err(|err| match err {
        AffirmError::Usage(info) => {
            AffirmError::Usage(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })?;
    tracing::debug!(
        path = %path.display(),
        types = manifest.types.len(),
        supports_enums = manifest.supports_enums,
        "loaded registry manifest"
    );
    Ok(manifest)
}

/// Loads a manifest from disk and builds a [`StaticRegistry`] from it.
pub fn load_static_registry(path: &Path) -> Result<StaticRegistry, AffirmError> {
    StaticRegistry::from_manifest(&load_registry_manifest(path)?)
}
