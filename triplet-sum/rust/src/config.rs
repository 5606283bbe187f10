use std::{
    env,
    fmt::{Debug, Display},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use tracing::info;

use triplet_sum::scenario::DEFAULT_BRUTE_FORCE_MAX_LEN;

const BRUTE_FORCE_MAX_LEN_VAR: &str = "TRIPLET_SUM_BRUTE_FORCE_MAX_LEN";

pub(crate) struct Config {
    inner: Box<ConfigInner>,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

static CELL: OnceLock<Config> = OnceLock::new();

/// Reads the environment (after `.env`, if present) once and keeps the result for the process.
pub(crate) fn init() -> Result<&'static Config> {
    if let Some(config) = CELL.get() {
        return Ok(config);
    }

    let config = Config {
        inner: Box::new(ConfigInner::from_env()?),
    };
    let config = CELL.get_or_init(|| config);

    info!(
        log_level = config.inner.log_level,
        brute_force_max_len = config.inner.brute_force_max_len,
        "initialized config"
    );

    Ok(config)
}

impl Config {
    pub(crate) fn brute_force_max_len(&'static self) -> usize {
        self.inner.brute_force_max_len
    }
}

#[derive(Debug)]
struct ConfigInner {
    log_level: String,
    brute_force_max_len: usize,
}

impl ConfigInner {
    fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let brute_force_max_len = match env::var(BRUTE_FORCE_MAX_LEN_VAR) {
            Ok(val) => val
                .trim()
                .parse()
                .with_context(|| format!("{BRUTE_FORCE_MAX_LEN_VAR} must be a non-negative integer, got '{val}'"))?,
            Err(env::VarError::NotPresent) => DEFAULT_BRUTE_FORCE_MAX_LEN,
            Err(e) => return Err(e).context(BRUTE_FORCE_MAX_LEN_VAR),
        };

        Ok(Self {
            log_level,
            brute_force_max_len,
        })
    }
}
