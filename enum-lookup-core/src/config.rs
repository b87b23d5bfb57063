//! # Config Module
//!
//! Generator settings shared by every annotation occurrence of a compilation.
//! Hosts usually load them from the environment at expansion time.

use crate::error::ConfigError;

pub const REQUIRE_ORDINAL_KEY: &str = "ENUM_LOOKUP_REQUIRE_ORDINAL";
pub const MUST_USE_KEY: &str = "ENUM_LOOKUP_MUST_USE";
pub const FIELD_PREFIXES_KEY: &str = "ENUM_LOOKUP_FIELD_PREFIXES";

/// Settings for [`LookupHandler`](crate::LookupHandler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// When `false`, an absent `constructor_argument_ordinal` defaults to 0.
    pub require_ordinal: bool,
    /// Tag the generated method so that discarding its result is flagged.
    pub must_use: bool,
    /// Prefixes stripped from the field name when naming the parameter.
    pub field_prefixes: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            require_ordinal: true,
            must_use: true,
            field_prefixes: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    ///
    /// Keys that are absent keep their default value.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = get(REQUIRE_ORDINAL_KEY) {
            config.require_ordinal = parse_bool(REQUIRE_ORDINAL_KEY, &value)?;
        }
        if let Some(value) = get(MUST_USE_KEY) {
            config.must_use = parse_bool(MUST_USE_KEY, &value)?;
        }
        if let Some(value) = get(FIELD_PREFIXES_KEY) {
            config.field_prefixes = value
                .split(',')
                .map(str::trim)
                .filter(|prefix| !prefix.is_empty())
                .map(str::to_string)
                .collect();
        }

        log::debug!("generator config: {config:?}");
        Ok(config)
    }

    /// Strips the first matching configured prefix from `field`.
    ///
    /// A prefix ending in a letter only matches when the character after it is
    /// not lowercase, so `m` strips `mValue` but leaves `measure` alone. The
    /// remainder is decapitalised. Names matching no prefix are returned as is.
    pub fn strip_prefix(&self, field: &str) -> String {
        for prefix in &self.field_prefixes {
            let Some(rest) = field.strip_prefix(prefix.as_str()) else {
                continue;
            };
            let Some(next) = rest.chars().next() else {
                continue;
            };
            let ends_in_letter = prefix.chars().last().is_some_and(char::is_alphabetic);
            if ends_in_letter && next.is_lowercase() {
                continue;
            }
            return decapitalize(rest);
        }
        field.to_string()
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
