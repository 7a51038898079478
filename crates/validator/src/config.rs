//! Engine configuration
//!
//! ```json
//! {
//!   "locale": "en",
//!   "max_depth": 32,
//!   "messages": {
//!     "email": { "message": "{field} does not look like an address" }
//!   }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::message::MessageSet;
use crate::registry::RegistryBuilder;

/// Environment variable holding the locale name.
pub const ENV_LOCALE: &str = "TAGVALID_LOCALE";

/// Environment variable holding the depth limit.
pub const ENV_MAX_DEPTH: &str = "TAGVALID_MAX_DEPTH";

/// Settings for building an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidateConfig {
    /// Locale for default messages.
    pub locale: String,
    /// Deepest record nesting allowed. Unlimited when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Custom messages per validator key.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub messages: IndexMap<String, MessageSet>,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            max_depth: None,
            messages: IndexMap::new(),
        }
    }
}

impl ValidateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    pub fn with_messages(mut self, key: impl Into<String>, messages: MessageSet) -> Self {
        self.messages.insert(key.into(), messages);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }

    /// Defaults overridden by `TAGVALID_LOCALE` and `TAGVALID_MAX_DEPTH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(locale) = lookup(ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            trace!(key = ENV_LOCALE, value = %locale, "loading env config");
            config.locale = locale.trim().to_owned();
        }

        if let Some(raw) = lookup(ENV_MAX_DEPTH).filter(|v| !v.trim().is_empty()) {
            trace!(key = ENV_MAX_DEPTH, value = %raw, "loading env config");
            let limit = raw.trim().parse::<usize>().map_err(|e| {
                Error::config(format!("{ENV_MAX_DEPTH}={raw} is not a valid depth: {e}"))
            })?;
            config.max_depth = Some(limit);
        }

        Ok(config)
    }

    /// Loads the locale, then the custom messages, into `builder`.
    pub fn apply(&self, builder: &mut RegistryBuilder) -> Result<()> {
        builder.load_locale(&self.locale)?;
        for (key, messages) in &self.messages {
            builder.set_custom_messages(key, messages.clone())?;
        }
        Ok(())
    }
}
