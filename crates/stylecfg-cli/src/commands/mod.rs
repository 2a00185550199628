pub mod check;
pub mod settings;
pub mod show;
pub mod themes;

use anyhow::Context;
use std::path::Path;
use stylecfg::{builtin_literal, validate, ConfigurationDocument, Loader};
use stylecfg_config::Settings;
use stylecfg_logger as logger;

pub fn load_settings() -> anyhow::Result<Settings> {
    Settings::load().map_err(|e| {
        anyhow::anyhow!(
            "Failed to load settings from {}: {}",
            Settings::path().display(),
            e
        )
    })
}

/// Explicit path, then `$STYLECFG_DOCUMENT` / `document-path`, then the
/// built-in literal.
pub fn resolve_document(
    path: Option<&Path>,
    settings: &Settings,
    loader: &Loader,
) -> anyhow::Result<ConfigurationDocument> {
    let path = path.map(Path::to_path_buf).or_else(|| settings.document_path());
    match path {
        Some(path) => {
            logger::info(&format!("Using document {}", path.display()));
            loader
                .load_path(&path)
                .with_context(|| format!("Failed to load {}", path.display()))
        }
        None => {
            logger::debug("No document configured, using the built-in literal");
            Ok(loader.load_value(builtin_literal())?)
        }
    }
}

/// Like [`resolve_document`], but a document that fails validation is an
/// error: nothing invalid is handed on to the build tool.
pub fn resolve_valid_document(
    path: Option<&Path>,
    settings: &Settings,
    loader: &Loader,
) -> anyhow::Result<ConfigurationDocument> {
    let doc = resolve_document(path, settings, loader)?;
    validate(&doc)?;
    Ok(doc)
}
