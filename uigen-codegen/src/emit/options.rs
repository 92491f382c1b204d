//! Generator options and their TOML loading.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order in which a synthesized emitter mirrors properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyOrder {
    /// Sorted by property name, so output is stable across runs.
    #[default]
    Name,
    /// In the order the type descriptor declares them.
    Declared,
}

/// Tunable behaviour of a [`ValueGenerator`](super::ValueGenerator).
///
/// Loaded from the `[generator]` table of a TOML document:
///
/// ```toml
/// [generator]
/// property_order = "declared"
/// name_separator = "_"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Property order of synthesized emitters.
    pub property_order: PropertyOrder,
    /// Joins a base name and a property name into a nested local name.
    pub name_separator: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            property_order: PropertyOrder::Name,
            name_separator: "_".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OptionsDocument {
    #[serde(default)]
    generator: GeneratorOptions,
}

impl GeneratorOptions {
    /// Set the property order.
    pub fn property_order(mut self, order: PropertyOrder) -> Self {
        self.property_order = order;
        self
    }

    /// Set the nested name separator.
    pub fn name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    /// Parse options from TOML source. A missing `[generator]` table yields
    /// the defaults; other tables are ignored.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self, Box<ConfigError>> {
        let doc: OptionsDocument = toml::from_str(src).map_err(|source| {
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, src.to_string()),
                span: source.span().map(SourceSpan::from),
                source,
            })
        })?;

        let options = doc.generator;
        if !is_valid_separator(&options.name_separator) {
            let span = src
                .find("name_separator")
                .map(|start| SourceSpan::from(start..start + "name_separator".len()));
            return Err(Box::new(ConfigError::InvalidSeparator {
                src: NamedSource::new(filename, src.to_string()),
                span,
                separator: options.name_separator,
            }));
        }

        Ok(options)
    }
}

/// Separators end up inside identifiers, so only identifier characters are
/// accepted. The empty separator concatenates names.
fn is_valid_separator(separator: &str) -> bool {
    separator.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Failure to load [`GeneratorOptions`].
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to parse generator options")]
    #[diagnostic(code(uigen::config::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid name separator '{separator}'")]
    #[diagnostic(
        code(uigen::config::invalid_separator),
        help("use only letters, numbers, and underscores")
    )]
    InvalidSeparator {
        #[source_code]
        src: NamedSource<String>,
        #[label("not usable inside an identifier")]
        span: Option<SourceSpan>,
        separator: String,
    },
}
