//! Client construction parameters.

use std::time::Duration;

use crate::types::ElectionID;

/// Production API host.
pub const DEFAULT_API_URL: &str = "https://api.smartvote.ch";

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for one [`Client`](crate::Client) session.
///
/// The election and language are fixed for the lifetime of a client. To
/// fetch content in several languages, build one client per language.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Election every endpoint is scoped to.
    pub election_id: ElectionID,
    /// Base URL without trailing slash. Defaults to `https://api.smartvote.ch`.
    pub api_url: String,
    /// Language code sent as `lang` on every request.
    pub language: String,
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
    /// Pause after each successful request.
    pub delay: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given election with default settings.
    pub fn new(election_id: ElectionID) -> Self {
        Self {
            election_id,
            api_url: DEFAULT_API_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            delay: Duration::ZERO,
        }
    }

    /// Creates a configuration from defaults overridden by environment variables.
    ///
    /// Reads `SMARTVOTE_API_URL`, `SMARTVOTE_LANGUAGE`, `SMARTVOTE_TIMEOUT_SECS`
    /// and `SMARTVOTE_DELAY_SECS`. Values that fail to parse are ignored.
    pub fn from_env(election_id: ElectionID) -> Self {
        Self::from_lookup(election_id, |key| std::env::var(key).ok())
    }

    fn from_lookup(election_id: ElectionID, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new(election_id);
        if let Some(api_url) = lookup("SMARTVOTE_API_URL") {
            config = config.with_api_url(&api_url);
        }
        if let Some(language) = lookup("SMARTVOTE_LANGUAGE") {
            config = config.with_language(language);
        }
        if let Some(secs) = lookup("SMARTVOTE_TIMEOUT_SECS").and_then(|v| v.parse::<u64>().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(delay) = lookup("SMARTVOTE_DELAY_SECS")
            .and_then(|v| v.parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        {
            config.delay = delay;
        }
        config
    }

    /// Points the client at another host. Trailing slashes are stripped.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the response language, e.g. `"de"` or [`Language::French`](crate::types::Language).
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the pause taken after every successful request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}
