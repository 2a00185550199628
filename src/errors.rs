//! Centralized error types for stylecfg
//!
//! `SchemaError` and `ValidationError` are both fatal to a load but kept
//! apart so callers can tell a wrongly shaped field from a well shaped field
//! holding a bad value. Every variant carries the dotted field path.

use std::path::PathBuf;
use thiserror::Error;

/// A field has the wrong shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("`{field}` must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{field}` is required")]
    Missing { field: String },

    #[error("unknown key `{field}`")]
    UnknownKey { field: String },
}

impl SchemaError {
    /// Path of the offending field, e.g. `daisyui.themes[2]`.
    pub fn field(&self) -> &str {
        match self {
            SchemaError::WrongType { field, .. }
            | SchemaError::Missing { field }
            | SchemaError::UnknownKey { field } => field,
        }
    }
}

/// A shape-valid field holds a semantically invalid value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate theme '{theme}' in `{plugin}.themes` (first listed at index {first})")]
    DuplicateTheme {
        plugin: String,
        theme: String,
        first: usize,
        index: usize,
    },

    #[error("`content[{index}]` is an empty glob pattern")]
    EmptyGlob { index: usize },

    #[error("`content[{index}]` is not a valid glob pattern '{pattern}': {reason}")]
    InvalidGlob {
        index: usize,
        pattern: String,
        reason: String,
    },
}

impl ValidationError {
    /// Path of the offending field, e.g. `daisyui.themes[3]`.
    pub fn field(&self) -> String {
        match self {
            ValidationError::DuplicateTheme { plugin, index, .. } => {
                format!("{}.themes[{}]", plugin, index)
            }
            ValidationError::EmptyGlob { index } | ValidationError::InvalidGlob { index, .. } => {
                format!("content[{}]", index)
            }
        }
    }
}

/// Errors raised while reading, parsing or rendering a configuration document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Failed to render {format} document: {message}")]
    Render {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::WrongType {
            field: "content".to_string(),
            expected: "a sequence of strings",
            found: "a string",
        };
        assert_eq!(
            err.to_string(),
            "`content` must be a sequence of strings, found a string"
        );
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn test_duplicate_theme_display() {
        let err = ValidationError::DuplicateTheme {
            plugin: "daisyui".to_string(),
            theme: "dark".to_string(),
            first: 1,
            index: 3,
        };
        assert!(err.to_string().starts_with("duplicate theme 'dark'"));
        assert_eq!(err.field(), "daisyui.themes[3]");
    }

    #[test]
    fn test_config_error_wraps_schema() {
        let err: ConfigError = SchemaError::Missing {
            field: "plugins[0].name".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Schema error: `plugins[0].name` is required");
    }
}
