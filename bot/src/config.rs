//! Startup configuration read from the process environment.
use std::env;
use std::fmt;

use crate::ConfigError;

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const SEED_VAR: &str = "SWEEPER_SEED";
pub const LOG_VAR: &str = "RUST_LOG";

/// Bot authentication secret; never printed in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: BotToken,
    /// Fixed seed for board generation, random when unset.
    pub seed: Option<u64>,
    /// Log filter directives; override the `-v`/`-q` level.
    pub log_directives: Option<String>,
}

impl BotConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TELEGRAM_BOT_TOKEN` - Bot authentication token (required)
    /// - `SWEEPER_SEED` - Seed for reproducible boards (default: random)
    /// - `RUST_LOG` - Log filter directives (default: from `-v`/`-q`)
    ///
    /// Call after loading `.env` so its values are visible here.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup(TOKEN_VAR)
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken(TOKEN_VAR))?;

        let seed = match lookup(SEED_VAR) {
            Some(value) => {
                let parsed = value.trim().parse::<u64>();
                Some(parsed.map_err(|_| ConfigError::InvalidSeed {
                    var: SEED_VAR,
                    value,
                })?)
            }
            None => None,
        };

        let log_directives = lookup(LOG_VAR).filter(|directives| !directives.trim().is_empty());

        Ok(Self {
            token: BotToken(token),
            seed,
            log_directives,
        })
    }
}
