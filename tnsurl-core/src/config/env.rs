//! Environment variable expansion and lookup.

use super::{ConfigError, ConfigResult};
use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Environment source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands environment variable references in config text.
///
/// Supported syntax:
/// - `${VAR}` - required variable
/// - `${VAR:-default}` - variable with default value
/// - `${VAR:?message}` - required with custom error
/// - `$VAR` - simple variable reference
///
/// A `$` not followed by a name or `{` is kept as is.
#[derive(Debug)]
pub struct EnvExpander<'s, S: EnvSource + ?Sized> {
    source: &'s S,
}

impl<'s, S: EnvSource + ?Sized> EnvExpander<'s, S> {
    /// Create an expander over a source.
    pub fn new(source: &'s S) -> Self {
        Self { source }
    }

    /// Expand every reference in `input`.
    pub fn expand(&self, input: &str) -> ConfigResult<String> {
        let mut result = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                result.push(c);
                continue;
            }
            match chars.peek() {
                Some('{') => {
                    chars.next();
                    result.push_str(&self.expand_braced(&mut chars)?);
                }
                Some(next) if next.is_alphabetic() || *next == '_' => {
                    result.push_str(&self.expand_simple(&mut chars)?);
                }
                _ => result.push(c),
            }
        }

        Ok(result)
    }

    fn expand_braced(&self, chars: &mut Peekable<Chars<'_>>) -> ConfigResult<String> {
        let mut name = String::new();
        let mut after_colon = false;
        let mut modifier = None;
        let mut modifier_value = String::new();

        for c in chars.by_ref() {
            if c == '}' {
                break;
            } else if modifier.is_some() {
                modifier_value.push(c);
            } else if after_colon {
                modifier = Some(c);
            } else if c == ':' {
                after_colon = true;
            } else {
                name.push(c);
            }
        }

        if name.is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                name: String::new(),
                message: "empty variable name".to_string(),
            });
        }

        match self.source.get(&name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => match modifier {
                Some('-') => Ok(modifier_value),
                Some('?') => Err(ConfigError::InvalidEnvValue {
                    message: if modifier_value.is_empty() {
                        format!("required variable '{}' is not set", name)
                    } else {
                        modifier_value
                    },
                    name,
                }),
                _ => Err(ConfigError::EnvNotFound(name)),
            },
        }
    }

    fn expand_simple(&self, chars: &mut Peekable<Chars<'_>>) -> ConfigResult<String> {
        let mut name = String::new();

        while let Some(&c) = chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                name.push(c);
                chars.next();
            } else {
                break;
            }
        }

        self.source
            .get(&name)
            .ok_or(ConfigError::EnvNotFound(name))
    }
}

/// Read a boolean override such as `TNSURL_TIBERO_ENABLE=true`.
pub(crate) fn read_bool<S: EnvSource + ?Sized>(
    source: &S,
    name: &str,
) -> ConfigResult<Option<bool>> {
    let Some(value) = source.get(name) else {
        return Ok(None);
    };
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidEnvValue {
            name: name.to_string(),
            message: format!("expected a boolean, got '{}'", value),
        }),
    }
}

/// Read a numeric override such as `TNSURL_RESOLVER_MAX_DEPTH=32`.
pub(crate) fn read_usize<S: EnvSource + ?Sized>(
    source: &S,
    name: &str,
) -> ConfigResult<Option<usize>> {
    let Some(value) = source.get(name) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvValue {
            name: name.to_string(),
            message: format!("expected a non-negative integer, got '{}'", value),
        })
}
