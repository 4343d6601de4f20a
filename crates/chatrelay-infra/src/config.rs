//! Environment configuration for the Supabase connection.
//!
//! `SUPABASE_URL` and `SUPABASE_KEY` are required; the process refuses to
//! start without them. The key is wrapped in [`secrecy::SecretString`]
//! and never appears in Debug output or logs.

use chatrelay_types::error::ConfigError;
use secrecy::SecretString;

/// Connection settings for the Supabase data API.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without a trailing slash.
    pub url: String,
    /// Service or anon API key.
    pub key: SecretString,
}

impl SupabaseConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an injectable lookup. Tests use
    /// this to avoid mutating process-global environment state.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = require(&lookup, "SUPABASE_URL")?;
        let key = require(&lookup, "SUPABASE_KEY")?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            key: SecretString::from(key),
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_lookup_reads_both_vars() {
        let vars = env(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_KEY", "service-key"),
        ]);
        let config = SupabaseConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.key.expose_secret(), "service-key");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let vars = env(&[
            ("SUPABASE_URL", "https://abc.supabase.co/"),
            ("SUPABASE_KEY", "k"),
        ]);
        let config = SupabaseConfig::from_lookup(|name| vars.get(name).cloned()).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
    }

    #[test]
    fn test_missing_url_fails() {
        let vars = env(&[("SUPABASE_KEY", "k")]);
        let err = SupabaseConfig::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SUPABASE_URL")));
    }

    #[test]
    fn test_empty_key_fails() {
        let vars = env(&[("SUPABASE_URL", "https://abc.supabase.co"), ("SUPABASE_KEY", "")]);
        let err = SupabaseConfig::from_lookup(|name| vars.get(name).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("SUPABASE_KEY")));
    }
}
