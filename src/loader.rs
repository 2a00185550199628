//! Schema-checked construction of [`ConfigurationDocument`]s
//!
//! Input is first parsed into a `serde_json::Value` tree (whatever the source
//! format) and then walked by hand so that every shape error names the exact
//! field that caused it.

use crate::document::{ConfigurationDocument, PluginRef, CONTENT_KEY, PLUGINS_KEY, THEMES_KEY};
use crate::errors::{ConfigError, SchemaError};
use crate::format::DocumentFormat;
use serde_json::{json, Map, Value};
use std::path::Path;
use stylecfg_config::{Settings, UnknownKeyPolicy};
use tracing::{debug, info};

const SEQUENCE_OF_STRINGS: &str = "a sequence of strings";

/// The literal the project ships with.
pub fn builtin_literal() -> Value {
    json!({
        "content": ["./src/**/*.{html,js,ts,vue}"],
        "plugins": ["daisyui"],
        "daisyui": {
            "themes": ["light", "dark", "corporate"],
        },
    })
}

/// Construct the built-in document.
pub fn load() -> Result<ConfigurationDocument, SchemaError> {
    Loader::new().load_value(builtin_literal())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

fn wrong_type(field: impl Into<String>, expected: &'static str, found: &Value) -> SchemaError {
    SchemaError::WrongType {
        field: field.into(),
        expected,
        found: kind(found),
    }
}

fn string_sequence(field: &str, value: &Value) -> Result<Vec<String>, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(field, SEQUENCE_OF_STRINGS, value))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(format!("{}[{}]", field, i), "a string", item))
        })
        .collect()
}

fn plugin_ref(field: String, value: &Value) -> Result<PluginRef, SchemaError> {
    match value {
        Value::String(name) => Ok(PluginRef::new(name.clone())),
        Value::Object(map) => {
            for key in map.keys() {
                if key != "name" && key != "options" {
                    return Err(SchemaError::UnknownKey {
                        field: format!("{}.{}", field, key),
                    });
                }
            }
            let name_field = format!("{}.name", field);
            let name = match map.get("name") {
                Some(Value::String(name)) => name.clone(),
                Some(other) => return Err(wrong_type(name_field, "a string", other)),
                None => return Err(SchemaError::Missing { field: name_field }),
            };
            Ok(match map.get("options") {
                Some(options) => PluginRef::with_options(name, options.clone()),
                None => PluginRef::new(name),
            })
        }
        other => Err(wrong_type(field, "a string or a mapping with `name`", other)),
    }
}

/// Builds documents under a given unknown-key policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader {
    policy: UnknownKeyPolicy,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UnknownKeyPolicy) -> Self {
        Self { policy }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_policy(settings.unknown_key_policy())
    }

    pub fn policy(&self) -> UnknownKeyPolicy {
        self.policy
    }

    pub fn load_value(&self, value: Value) -> Result<ConfigurationDocument, SchemaError> {
        let root = match value {
            Value::Object(map) => map,
            other => return Err(wrong_type("<root>", "a mapping", &other)),
        };

        let content_globs = match root.get(CONTENT_KEY) {
            Some(value) => string_sequence(CONTENT_KEY, value)?,
            None => Vec::new(),
        };

        let plugins = match root.get(PLUGINS_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| plugin_ref(format!("{}[{}]", PLUGINS_KEY, i), item))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(wrong_type(PLUGINS_KEY, "a sequence of plugin references", other))
            }
            None => Vec::new(),
        };

        let mut extension_settings = Map::new();
        let mut passthrough = Map::new();
        for (key, value) in root {
            if key == CONTENT_KEY || key == PLUGINS_KEY {
                continue;
            }
            if plugins.iter().any(|plugin| plugin.name() == key) {
                if let Some(themes) = value.get(THEMES_KEY) {
                    string_sequence(&format!("{}.{}", key, THEMES_KEY), themes)?;
                }
                extension_settings.insert(key, value);
            } else if self.policy == UnknownKeyPolicy::Reject {
                return Err(SchemaError::UnknownKey { field: key });
            } else {
                debug!("Passing through unrecognised key '{}'", key);
                passthrough.insert(key, value);
            }
        }

        debug!(
            "Loaded document: {} content glob(s), {} plugin(s), {} settings block(s), {} passthrough key(s)",
            content_globs.len(),
            plugins.len(),
            extension_settings.len(),
            passthrough.len()
        );

        Ok(ConfigurationDocument::from_parts(
            content_globs,
            plugins,
            extension_settings,
            passthrough,
        ))
    }

    pub fn load_str(
        &self,
        text: &str,
        format: DocumentFormat,
    ) -> Result<ConfigurationDocument, ConfigError> {
        let value = format.parse(text)?;
        Ok(self.load_value(value)?)
    }

    /// Read a document from disk, detecting the format from the extension.
    pub fn load_path(&self, path: &Path) -> Result<ConfigurationDocument, ConfigError> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            ConfigError::UnsupportedFormat(path.display().to_string())
        })?;
        info!("Loading {} document from {}", format.name(), path.display());
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&text, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_document() {
        let doc = load().unwrap();
        assert_eq!(doc.content_globs(), ["./src/**/*.{html,js,ts,vue}"]);
        assert_eq!(doc.plugin_names(), vec!["daisyui"]);
        assert_eq!(
            doc.themes("daisyui"),
            Some(vec!["light", "dark", "corporate"])
        );
        assert!(doc.passthrough().is_empty());
    }

    #[test]
    fn test_content_as_single_string_is_schema_error() {
        let err = Loader::new()
            .load_value(json!({ "content": "./src/**/*.html" }))
            .unwrap_err();
        assert_eq!(err.field(), "content");
        assert!(matches!(err, SchemaError::WrongType { found: "a string", .. }));
    }

    #[test]
    fn test_non_string_glob_names_index() {
        let err = Loader::new()
            .load_value(json!({ "content": ["./a/*.html", 3] }))
            .unwrap_err();
        assert_eq!(err.field(), "content[1]");
    }

    #[test]
    fn test_themes_not_a_sequence() {
        let err = Loader::new()
            .load_value(json!({
                "plugins": ["daisyui"],
                "daisyui": { "themes": "light" },
            }))
            .unwrap_err();
        assert_eq!(err.field(), "daisyui.themes");
    }

    #[test]
    fn test_theme_entry_not_a_string() {
        let err = Loader::new()
            .load_value(json!({
                "plugins": ["daisyui"],
                "daisyui": { "themes": ["light", { "custom": {} }] },
            }))
            .unwrap_err();
        assert_eq!(err.field(), "daisyui.themes[1]");
    }

    #[test]
    fn test_plugin_mapping_form() {
        let doc = Loader::new()
            .load_value(json!({
                "plugins": ["daisyui", { "name": "@tailwindcss/forms", "options": { "strategy": "class" } }],
            }))
            .unwrap();
        assert_eq!(doc.plugin_names(), vec!["daisyui", "@tailwindcss/forms"]);
        assert_eq!(
            doc.plugins()[1].options(),
            Some(&json!({ "strategy": "class" }))
        );
    }

    #[test]
    fn test_plugin_mapping_without_name() {
        let err = Loader::new()
            .load_value(json!({ "plugins": [{ "options": {} }] }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::Missing {
                field: "plugins[0].name".to_string()
            }
        );
    }

    #[test]
    fn test_plugin_of_wrong_type() {
        let err = Loader::new()
            .load_value(json!({ "plugins": [true] }))
            .unwrap_err();
        assert_eq!(err.field(), "plugins[0]");
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = Loader::new().load_value(json!(["content"])).unwrap_err();
        assert_eq!(err.field(), "<root>");
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let doc = Loader::new().load_value(json!({})).unwrap();
        assert!(doc.content_globs().is_empty());
        assert!(doc.plugins().is_empty());
    }

    #[test]
    fn test_unknown_keys_pass_through_in_order() {
        let doc = Loader::new()
            .load_value(json!({
                "darkMode": "class",
                "content": [],
                "prefix": "tw-",
            }))
            .unwrap();
        let keys: Vec<&String> = doc.passthrough().keys().collect();
        assert_eq!(keys, vec!["darkMode", "prefix"]);
    }

    #[test]
    fn test_unknown_keys_rejected_by_policy() {
        let err = Loader::with_policy(UnknownKeyPolicy::Reject)
            .load_value(json!({ "content": [], "prefix": "tw-" }))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownKey {
                field: "prefix".to_string()
            }
        );
    }

    #[test]
    fn test_settings_block_for_undeclared_plugin_passes_through() {
        let doc = Loader::new()
            .load_value(json!({ "daisyui": { "themes": 5 } }))
            .unwrap();
        assert!(doc.extension_settings().is_empty());
        assert!(doc.passthrough().contains_key("daisyui"));
    }

    #[test]
    fn test_load_str_yaml() {
        let doc = Loader::new()
            .load_str(
                "content:\n  - ./src/**/*.html\nplugins:\n  - daisyui\ndaisyui:\n  themes: [light, dark]\n",
                DocumentFormat::Yaml,
            )
            .unwrap();
        assert_eq!(doc.themes("daisyui"), Some(vec!["light", "dark"]));
    }

    #[test]
    fn test_load_path_unsupported_extension() {
        let err = Loader::new()
            .load_path(Path::new("tailwind.config.js"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_path_missing_file() {
        let err = Loader::new()
            .load_path(Path::new("/definitely/not/here/stylecfg.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
