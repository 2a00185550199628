//! stylecfg: typed configuration for a CSS utility framework and its theme plugin
//!
//! A document declares content globs to scan, the plugins to register and a
//! settings block per plugin (for the theme plugin, its list of theme names).
//! This crate loads such a document, validates it and projects it into the
//! shape the build tool reads. Scanning files, generating classes and running
//! plugins all belong to the build tool.
//!
//! ```
//! let doc = stylecfg::load().unwrap();
//! stylecfg::validate(&doc).unwrap();
//! let external = stylecfg::to_external_format(&doc);
//! assert_eq!(external.themes("daisyui"), Some(vec!["light", "dark", "corporate"]));
//! ```

pub mod document;
pub mod errors;
pub mod external;
pub mod format;
pub mod lint;
pub mod loader;
pub mod validation;

pub use document::{ConfigurationDocument, PluginRef};
pub use errors::{ConfigError, SchemaError, ValidationError};
pub use external::{to_external_format, ExternalConfig};
pub use format::DocumentFormat;
pub use lint::{lint, LintWarning};
pub use loader::{builtin_literal, load, Loader};
pub use validation::{validate, validate_all};

pub use stylecfg_config::{ReportMode, Settings, UnknownKeyPolicy};
