//! Manager configuration loaded from the environment.
use std::env;

use pasture_core::{AnimationMode, PastureConfig};

/// Settings the herd manager starts from.
#[derive(Clone, Debug, Default)]
pub struct ManagerConfig {
    pub pasture: PastureConfig,
}

impl ManagerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `PASTURE_COLUMNS` / `PASTURE_ROWS`
    /// - `PASTURE_ANIMATION` (`synchronous`, `asynchronous`, `asynchronous_no_wait`)
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(columns) = parse::<u32>(&lookup, "PASTURE_COLUMNS") {
            config.pasture.columns = columns.max(1);
        }

        if let Some(rows) = parse::<u32>(&lookup, "PASTURE_ROWS") {
            config.pasture.rows = rows.max(1);
        }

        if let Some(animation) = parse::<AnimationMode>(&lookup, "PASTURE_ANIMATION") {
            config.pasture.animation = animation;
        }

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
