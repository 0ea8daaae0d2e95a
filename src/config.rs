//! Translation settings threaded into the analyses.
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! use_arc = false
//! strip_reflection = true
//!
//! [retained_functions]
//! JreStrcat = "JreStrcatRetained"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::diagnostics::PassError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationConfig {
    /// Target code is compiled with automatic reference counting.
    #[serde(default)]
    pub use_arc: bool,
    /// Drop reflective metadata unless a declaration asks for it.
    #[serde(default)]
    pub strip_reflection: bool,
    #[serde(default)]
    pub retained_functions: RetainedFunctions,
}

impl TranslationConfig {
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, PassError> {
        toml::from_str(text).map_err(|e| PassError::config(e.message().to_string(), path))
    }

    pub fn load(path: &Path) -> Result<Self, PassError> {
        let text = std::fs::read_to_string(path).map_err(|e| PassError::io(e, path))?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(
            path = %path.display(),
            use_arc = config.use_arc,
            strip_reflection = config.strip_reflection,
            retained_functions = config.retained_functions.len(),
            "loaded translation config"
        );
        Ok(config)
    }
}

/// Functions whose generated code hands back an already-retained result,
/// keyed by function name, mapped to the name of that retained variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RetainedFunctions {
    names: BTreeMap<String, String>,
}

impl RetainedFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, function: impl Into<String>, retained_name: impl Into<String>) {
        self.names.insert(function.into(), retained_name.into());
    }

    pub fn retained_name(&self, function: &str) -> Option<&str> {
        self.names.get(function).map(String::as_str)
    }

    pub fn contains(&self, function: &str) -> bool {
        self.names.contains_key(function)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RetainedFunctions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.register(k, v);
        }
        out
    }
}
