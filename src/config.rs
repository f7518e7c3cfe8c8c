use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Some websites refuse requests without a browser-looking user agent
const USER_AGENT_DEFAULT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/77.0.3865.120 Safari/537.36";

const GITHUB_API_URL_DEFAULT: &str = "https://api.github.com";
const YOUTUBE_API_URL_DEFAULT: &str = "https://www.googleapis.com";

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_API_KEY";
pub const YOUTUBE_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const PROXY_ENV: &str = "OPT_PROXY";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Token sent to the GitHub REST API
    #[serde(default)]
    pub github_token: Option<String>,

    /// Key sent to the YouTube Data API
    #[serde(default)]
    pub youtube_api_key: Option<String>,

    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    #[serde(default = "default_youtube_api_url")]
    pub youtube_api_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Route every request through this proxy (http, https or socks5 url)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Client-wide request timeout. Unset means requests may hang forever.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Treat every non-success status of a plain page fetch as a failure,
    /// not only 404.
    #[serde(default)]
    pub strict_http_status: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            youtube_api_key: None,
            github_api_url: default_github_api_url(),
            youtube_api_url: default_youtube_api_url(),
            user_agent: default_user_agent(),
            proxy: None,
            request_timeout_secs: None,
            strict_http_status: false,
        }
    }
}

fn default_github_api_url() -> String {
    GITHUB_API_URL_DEFAULT.to_string()
}

fn default_youtube_api_url() -> String {
    YOUTUBE_API_URL_DEFAULT.to_string()
}

fn default_user_agent() -> String {
    USER_AGENT_DEFAULT.to_string()
}

impl Config {
    /// Load the config file at `path` (defaults when it does not exist), then
    /// apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            Some(path) => {
                log::debug!("config {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        serde_yml::from_str(&config_str)
            .with_context(|| format!("config {} is malformed", path.display()))
    }

    /// Credentials and proxy may come from the environment; non-empty values win
    /// over the file.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(token) = non_empty(GITHUB_TOKEN_ENV) {
            self.github_token = Some(token);
        }
        if let Some(key) = non_empty(YOUTUBE_KEY_ENV) {
            self.youtube_api_key = Some(key);
        }
        if let Some(proxy) = non_empty(PROXY_ENV) {
            self.proxy = Some(proxy);
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("github_api_url", &self.github_api_url),
            ("youtube_api_url", &self.youtube_api_url),
        ] {
            let parsed = url::Url::parse(value)
                .with_context(|| format!("{field} is not a valid url: {value}"))?;
            if !["http", "https"].contains(&parsed.scheme()) {
                bail!("{field} must be an http(s) url, got {value}");
            }
        }

        if self.request_timeout_secs == Some(0) {
            bail!("request_timeout_secs must be greater than 0");
        }

        if self.user_agent.trim().is_empty() {
            bail!("user_agent must not be empty");
        }

        Ok(())
    }
}
