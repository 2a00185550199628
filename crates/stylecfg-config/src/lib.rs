use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Overrides the settings file location when set and non-empty.
pub const SETTINGS_ENV: &str = "STYLECFG_SETTINGS";
/// Overrides `document-path` for a single run.
pub const DOCUMENT_ENV: &str = "STYLECFG_DOCUMENT";

const KEYS: &[&str] = &["document-path", "unknown-keys", "report", "output-format"];

/// What the loader does with top-level keys it does not interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Keep them opaquely and forward them to the build tool.
    #[default]
    PassThrough,
    /// Fail the load on the first unknown key.
    Reject,
}

impl FromStr for UnknownKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pass-through" | "passthrough" => Ok(Self::PassThrough),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "invalid unknown-keys policy '{}', expected 'pass-through' or 'reject'",
                other
            )),
        }
    }
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => f.write_str("pass-through"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

/// How many validation problems `check` reports before failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    #[default]
    First,
    All,
}

impl FromStr for ReportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            other => Err(format!(
                "invalid report mode '{}', expected 'first' or 'all'",
                other
            )),
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::All => f.write_str("all"),
        }
    }
}

fn check_output_format(value: &str) -> Result<(), String> {
    match value.trim() {
        "json" | "yaml" | "toml" => Ok(()),
        other => Err(format!(
            "invalid output format '{}', expected 'json', 'yaml' or 'toml'",
            other
        )),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_keys: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

impl Settings {
    pub fn path() -> PathBuf {
        if let Ok(env_path) = std::env::var(SETTINGS_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        #[cfg(not(target_os = "windows"))]
        let base = dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from("."));

        #[cfg(target_os = "windows")]
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));

        base.join("stylecfg").join("stylecfg.toml")
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_from(&Self::path())
    }

    /// Missing file means defaults; a file with invalid values is an error.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.check()?;
        Ok(settings)
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn reset() -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        KEYS
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "document-path" => self.document_path.clone(),
            "unknown-keys" => self.unknown_keys.clone(),
            "report" => self.report.clone(),
            "output-format" => self.output_format.clone(),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "document-path" => self.document_path = Some(value),
            "unknown-keys" => {
                value.parse::<UnknownKeyPolicy>()?;
                self.unknown_keys = Some(value.trim().to_string());
            }
            "report" => {
                value.parse::<ReportMode>()?;
                self.report = Some(value.trim().to_string());
            }
            "output-format" => {
                check_output_format(&value)?;
                self.output_format = Some(value.trim().to_string());
            }
            _ => {
                return Err(format!(
                    "unknown setting '{}', expected one of: {}",
                    key,
                    KEYS.join(", ")
                )
                .into())
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.document_path.is_none()
            && self.unknown_keys.is_none()
            && self.report.is_none()
            && self.output_format.is_none()
    }

    pub fn values_iter(&self) -> Vec<(&str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    fn check(&self) -> Result<(), String> {
        if let Some(ref value) = self.unknown_keys {
            value.parse::<UnknownKeyPolicy>()?;
        }
        if let Some(ref value) = self.report {
            value.parse::<ReportMode>()?;
        }
        if let Some(ref value) = self.output_format {
            check_output_format(value)?;
        }
        Ok(())
    }

    /// `$STYLECFG_DOCUMENT` wins over the stored `document-path`.
    pub fn document_path(&self) -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var(DOCUMENT_ENV) {
            let trimmed = env_path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        self.document_path.as_deref().map(PathBuf::from)
    }

    pub fn unknown_key_policy(&self) -> UnknownKeyPolicy {
        self.unknown_keys
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn report_mode(&self) -> ReportMode {
        self.report
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn output_format(&self) -> &str {
        self.output_format.as_deref().unwrap_or("json")
    }
}
