//! Non-fatal findings
//!
//! None of these stop a load or fail validation; the CLI prints them as
//! warnings before checking.

use crate::document::ConfigurationDocument;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// npm package name, optionally scoped (`daisyui`, `@tailwindcss/forms`).
static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(@[a-z0-9][a-z0-9._~-]*/)?[a-z0-9][a-z0-9._~-]*$")
        .expect("package name pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    EmptyContent,
    BlankGlob { index: usize },
    DuplicatePlugin { name: String, index: usize },
    UnusualPluginName { name: String, index: usize },
    EmptyTheme { plugin: String, index: usize },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::EmptyContent => {
                write!(f, "`content` is empty; no source files will be scanned")
            }
            LintWarning::BlankGlob { index } => {
                write!(f, "`content[{}]` only contains whitespace", index)
            }
            LintWarning::DuplicatePlugin { name, index } => {
                write!(f, "plugin '{}' is listed again at `plugins[{}]`", name, index)
            }
            LintWarning::UnusualPluginName { name, index } => write!(
                f,
                "`plugins[{}]` '{}' does not look like a package name",
                index, name
            ),
            LintWarning::EmptyTheme { plugin, index } => {
                write!(f, "`{}.themes[{}]` is an empty theme name", plugin, index)
            }
        }
    }
}

pub fn lint(doc: &ConfigurationDocument) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if doc.content_globs().is_empty() {
        warnings.push(LintWarning::EmptyContent);
    }

    for (index, pattern) in doc.content_globs().iter().enumerate() {
        if !pattern.is_empty() && pattern.trim().is_empty() {
            warnings.push(LintWarning::BlankGlob { index });
        }
    }

    let mut seen = HashSet::new();
    for (index, name) in doc.plugin_names().into_iter().enumerate() {
        if !seen.insert(name) {
            warnings.push(LintWarning::DuplicatePlugin {
                name: name.to_string(),
                index,
            });
        } else if !PACKAGE_NAME.is_match(name) {
            warnings.push(LintWarning::UnusualPluginName {
                name: name.to_string(),
                index,
            });
        }
    }

    for (plugin, themes) in doc.all_themes() {
        for (index, theme) in themes.iter().enumerate() {
            if theme.trim().is_empty() {
                warnings.push(LintWarning::EmptyTheme {
                    plugin: plugin.to_string(),
                    index,
                });
            }
        }
    }

    warnings
}
