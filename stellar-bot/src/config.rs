use std::env;
use std::time::Duration;

use anyhow::Context as _;
use stellar_api::ProfileClientConfig;

/// Everything the process needs, read once at startup.
#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    /// Register slash commands in this guild only; global registration otherwise.
    pub guild_id: Option<u64>,
    pub api: ProfileClientConfig,
}

impl BotConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    fn from_source(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let token = non_empty(get("DISCORD_TOKEN")).context("DISCORD_TOKEN is not set")?;

        let guild_id = non_empty(get("DISCORD_GUILD_ID"))
            .map(|raw| {
                raw.parse::<u64>()
                    .with_context(|| format!("DISCORD_GUILD_ID is not a valid id: `{raw}`"))
            })
            .transpose()?;

        let defaults = ProfileClientConfig::default();
        let base_url = non_empty(get("HSR_API_BASE_URL")).unwrap_or(defaults.base_url);
        let timeout_seconds = non_empty(get("HSR_API_TIMEOUT_SECONDS"))
            .map(|raw| {
                raw.parse::<u64>().with_context(|| {
                    format!("HSR_API_TIMEOUT_SECONDS is not a whole number of seconds: `{raw}`")
                })
            })
            .transpose()?;
        let timeout = match timeout_seconds {
            Some(0) => None,
            Some(seconds) => Some(Duration::from_secs(seconds)),
            None => defaults.timeout,
        };

        Ok(Self {
            token,
            guild_id,
            api: ProfileClientConfig { base_url, timeout },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::BotConfig;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<BotConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        BotConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn token_is_required() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DISCORD_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = config_from(&[("DISCORD_TOKEN", "secret")]).unwrap();

        assert_eq!(config.token, "secret");
        assert_eq!(config.guild_id, None);
        assert_eq!(
            config.api.base_url,
            stellar_api::client::DEFAULT_BASE_URL
        );
        assert_eq!(config.api.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn overrides_are_read() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("DISCORD_GUILD_ID", "123456789012345678"),
            ("HSR_API_BASE_URL", "http://localhost:8000/profile"),
            ("HSR_API_TIMEOUT_SECONDS", "3"),
        ])
        .unwrap();

        assert_eq!(config.guild_id, Some(123_456_789_012_345_678));
        assert_eq!(config.api.base_url, "http://localhost:8000/profile");
        assert_eq!(config.api.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "secret"),
            ("HSR_API_TIMEOUT_SECONDS", "0"),
        ])
        .unwrap();

        assert_eq!(config.api.timeout, None);
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        for raw in ["fifteen", "-5", "1.5"] {
            let err = config_from(&[
                ("DISCORD_TOKEN", "secret"),
                ("HSR_API_TIMEOUT_SECONDS", raw),
            ])
            .unwrap_err();
            assert!(err.to_string().contains("HSR_API_TIMEOUT_SECONDS"));
        }
    }

    #[test]
    fn malformed_guild_id_is_rejected() {
        let err = config_from(&[("DISCORD_TOKEN", "secret"), ("DISCORD_GUILD_ID", "abc")])
            .unwrap_err();
        assert!(err.to_string().contains("DISCORD_GUILD_ID"));
    }
}
