use std::env;

use crate::error::ConfigError;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_URL: &str = "https://github.com";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct Config {
    /// GitHub personal access token
    pub github_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Destination chat id (numeric id or `@channel`)
    pub telegram_chat: String,
    /// Explicit identity; skips the `/user` lookup when set
    pub github_user: Option<String>,
    pub github_api_url: String,
    /// Web base used for trending pages and digest links
    pub github_url: String,
    pub telegram_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary lookup.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let config = Self {
            github_token: require("GH_TOKEN")?,
            telegram_token: require("TG_TOKEN")?,
            telegram_chat: require("TG_CHAT")?,
            github_user: get("GITHUB_USER"),
            github_api_url: get("GITHUB_API_URL")
                .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            github_url: get("GITHUB_URL").unwrap_or_else(|| DEFAULT_GITHUB_URL.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
        };

        for (name, value) in [
            ("GITHUB_API_URL", &config.github_api_url),
            ("GITHUB_URL", &config.github_url),
            ("TELEGRAM_API_URL", &config.telegram_api_url),
        ] {
            if reqwest::Url::parse(value).is_err() {
                return Err(ConfigError::Invalid {
                    name,
                    reason: format!("not a URL: {}", value),
                });
            }
        }

        Ok(config)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("github_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat", &self.telegram_chat)
            .field("github_user", &self.github_user)
            .field("github_api_url", &self.github_api_url)
            .field("github_url", &self.github_url)
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("GH_TOKEN", "ghp_test"),
        ("TG_TOKEN", "123:abc"),
        ("TG_CHAT", "-100200300"),
    ];

    #[test]
    fn required_values_with_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.github_token, "ghp_test");
        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.telegram_chat, "-100200300");
        assert_eq!(config.github_user, None);
        assert_eq!(config.github_api_url, DEFAULT_GITHUB_API_URL);
        assert_eq!(config.github_url, DEFAULT_GITHUB_URL);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
    }

    #[test]
    fn missing_chat_is_fatal() {
        let result = Config::from_lookup(lookup(&REQUIRED[..2]));
        assert!(matches!(result, Err(ConfigError::Missing("TG_CHAT"))));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut vars = REQUIRED.to_vec();
        vars[0] = ("GH_TOKEN", "   ");
        let result = Config::from_lookup(lookup(&vars));
        assert!(matches!(result, Err(ConfigError::Missing("GH_TOKEN"))));
    }

    #[test]
    fn identity_override_is_trimmed() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("GITHUB_USER", " octocat "));
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.github_user.as_deref(), Some("octocat"));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("GITHUB_URL", "not a url"));
        let result = Config::from_lookup(lookup(&vars));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "GITHUB_URL",
                ..
            })
        ));
    }

    #[test]
    fn debug_redacts_tokens() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        let shown = format!("{:?}", config);
        assert!(!shown.contains("ghp_test"));
        assert!(!shown.contains("123:abc"));
    }
}
