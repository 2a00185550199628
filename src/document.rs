//! The configuration document
//!
//! A document is built once by [`crate::loader::Loader`] and never mutated
//! afterwards: fields are private and only read accessors are exposed, so a
//! `&ConfigurationDocument` can be handed to any number of readers.

use serde_json::{Map, Value};

/// Key holding the content glob list.
pub const CONTENT_KEY: &str = "content";
/// Key holding the plugin list.
pub const PLUGINS_KEY: &str = "plugins";
/// Key inside a plugin settings block holding the theme list.
pub const THEMES_KEY: &str = "themes";

/// Reference to a build-tool plugin
///
/// The handle is opaque here: `name` is whatever the build tool resolves
/// (`"daisyui"`, `"@tailwindcss/typography"`), `options` is forwarded as is.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginRef {
    name: String,
    options: Option<Value>,
}

impl PluginRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options: Some(options),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> Option<&Value> {
        self.options.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationDocument {
    content_globs: Vec<String>,
    plugins: Vec<PluginRef>,
    extension_settings: Map<String, Value>,
    passthrough: Map<String, Value>,
}

impl ConfigurationDocument {
    pub(crate) fn from_parts(
        content_globs: Vec<String>,
        plugins: Vec<PluginRef>,
        extension_settings: Map<String, Value>,
        passthrough: Map<String, Value>,
    ) -> Self {
        Self {
            content_globs,
            plugins,
            extension_settings,
            passthrough,
        }
    }

    pub fn content_globs(&self) -> &[String] {
        &self.content_globs
    }

    pub fn plugins(&self) -> &[PluginRef] {
        &self.plugins
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(PluginRef::name).collect()
    }

    /// Settings blocks keyed by plugin name, in literal order.
    pub fn extension_settings(&self) -> &Map<String, Value> {
        &self.extension_settings
    }

    pub fn settings_for(&self, plugin: &str) -> Option<&Value> {
        self.extension_settings.get(plugin)
    }

    /// Theme names declared in a plugin's settings block, in order.
    ///
    /// `None` when the plugin has no block or the block has no `themes`.
    pub fn themes(&self, plugin: &str) -> Option<Vec<&str>> {
        let themes = self.settings_for(plugin)?.get(THEMES_KEY)?.as_array()?;
        Some(themes.iter().filter_map(Value::as_str).collect())
    }

    /// Every plugin that declares a theme list, with its themes.
    pub fn all_themes(&self) -> Vec<(&str, Vec<&str>)> {
        self.extension_settings
            .keys()
            .filter_map(|plugin| self.themes(plugin).map(|themes| (plugin.as_str(), themes)))
            .collect()
    }

    /// Top-level keys the crate does not interpret, in literal order.
    pub fn passthrough(&self) -> &Map<String, Value> {
        &self.passthrough
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ConfigurationDocument {
        let mut settings = Map::new();
        settings.insert(
            "daisyui".to_string(),
            json!({ "themes": ["light", "dark"], "logs": false }),
        );
        settings.insert("forms".to_string(), json!({ "strategy": "class" }));
        ConfigurationDocument::from_parts(
            vec!["./src/**/*.html".to_string()],
            vec![PluginRef::new("daisyui"), PluginRef::new("forms")],
            settings,
            Map::new(),
        )
    }

    #[test]
    fn test_themes_for_plugin() {
        let doc = sample();
        assert_eq!(doc.themes("daisyui"), Some(vec!["light", "dark"]));
        assert_eq!(doc.themes("forms"), None);
        assert_eq!(doc.themes("missing"), None);
    }

    #[test]
    fn test_all_themes_skips_blocks_without_themes() {
        let doc = sample();
        let all = doc.all_themes();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0, "daisyui");
    }

    #[test]
    fn test_plugin_names_keep_order() {
        assert_eq!(sample().plugin_names(), vec!["daisyui", "forms"]);
    }

    #[test]
    fn test_document_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationDocument>();
    }
}
