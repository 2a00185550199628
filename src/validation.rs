//! Semantic checks on a shape-valid document
//!
//! Only what this crate can know is checked: duplicate theme names and glob
//! syntax. Whether a glob matches any file, or whether a theme name is one
//! the plugin knows, is left to the build tool.

use crate::document::ConfigurationDocument;
use crate::errors::ValidationError;
use globset::GlobBuilder;
use std::collections::HashMap;
use tracing::debug;

fn check_glob(index: usize, pattern: &str) -> Result<(), ValidationError> {
    if pattern.is_empty() {
        return Err(ValidationError::EmptyGlob { index });
    }
    if pattern.contains('\0') {
        return Err(ValidationError::InvalidGlob {
            index,
            pattern: pattern.to_string(),
            reason: "contains a NUL character".to_string(),
        });
    }
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidGlob {
            index,
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}

fn duplicate_themes(plugin: &str, themes: &[&str]) -> Vec<ValidationError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();
    for (index, &theme) in themes.iter().enumerate() {
        match seen.get(theme) {
            Some(&first) => errors.push(ValidationError::DuplicateTheme {
                plugin: plugin.to_string(),
                theme: theme.to_string(),
                first,
                index,
            }),
            None => {
                seen.insert(theme, index);
            }
        }
    }
    errors
}

/// Every problem in the document: content globs first, then settings blocks
/// in literal order.
pub fn validate_all(doc: &ConfigurationDocument) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = doc
        .content_globs()
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| check_glob(index, pattern).err())
        .collect();

    for (plugin, themes) in doc.all_themes() {
        errors.extend(duplicate_themes(plugin, &themes));
    }

    debug!("Validation found {} problem(s)", errors.len());
    errors
}

/// First problem found, in the order [`validate_all`] reports them.
pub fn validate(doc: &ConfigurationDocument) -> Result<(), ValidationError> {
    match validate_all(doc).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
