//! Projection of a document into the shape the build tool's loader reads

use crate::document::{ConfigurationDocument, PluginRef, CONTENT_KEY, PLUGINS_KEY, THEMES_KEY};
use crate::errors::ConfigError;
use crate::format::DocumentFormat;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Ordered nested mapping handed to the build tool.
///
/// Key order is `content`, `plugins`, the plugin settings blocks, then the
/// passthrough keys, each group in literal order. JSON and YAML output keep
/// that order; TOML writes plain values before tables, so there settings
/// blocks follow any scalar passthrough keys. Rendering the same document
/// always yields the same bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ExternalConfig(Map<String, Value>);

fn plugin_value(plugin: &PluginRef) -> Value {
    match plugin.options() {
        Some(options) => json!({ "name": plugin.name(), "options": options }),
        None => Value::String(plugin.name().to_string()),
    }
}

pub fn to_external_format(doc: &ConfigurationDocument) -> ExternalConfig {
    let mut map = Map::new();
    map.insert(
        CONTENT_KEY.to_string(),
        Value::Array(
            doc.content_globs()
                .iter()
                .cloned()
                .map(Value::String)
                .collect(),
        ),
    );
    map.insert(
        PLUGINS_KEY.to_string(),
        Value::Array(doc.plugins().iter().map(plugin_value).collect()),
    );
    for (key, value) in doc.extension_settings() {
        map.insert(key.clone(), value.clone());
    }
    for (key, value) in doc.passthrough() {
        map.insert(key.clone(), value.clone());
    }
    ExternalConfig(map)
}

impl ConfigurationDocument {
    pub fn to_external_format(&self) -> ExternalConfig {
        to_external_format(self)
    }
}

impl ExternalConfig {
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Plugin names in registration order.
    pub fn plugin_names(&self) -> Vec<&str> {
        self.0
            .get(PLUGINS_KEY)
            .and_then(Value::as_array)
            .map(|plugins| {
                plugins
                    .iter()
                    .filter_map(|plugin| match plugin {
                        Value::String(name) => Some(name.as_str()),
                        other => other.get("name").and_then(Value::as_str),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn themes(&self, plugin: &str) -> Option<Vec<&str>> {
        let themes = self.0.get(plugin)?.get(THEMES_KEY)?.as_array()?;
        Some(themes.iter().filter_map(Value::as_str).collect())
    }

    pub fn render(&self, format: DocumentFormat) -> Result<String, ConfigError> {
        format.render(&Value::Object(self.0.clone()))
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        self.render(DocumentFormat::Json)
    }
}
