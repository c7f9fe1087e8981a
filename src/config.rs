//! Runtime configuration: environment variables, then command-line flags.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, bail, Result};

use crate::types::{BOARD_COLS, BOARD_ROWS, TICK_MS};

pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 40;
pub const MIN_TICK_MS: u64 = 10;

pub const USAGE: &str =
    "usage: falling-blocks [--rows N] [--cols N] [--tick-ms N] [--seed N] [--log PATH]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub tick_ms: u64,
    /// Fixed seed; `None` seeds from the clock
    pub seed: Option<u32>,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            tick_ms: TICK_MS as u64,
            seed: None,
            log_path: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `FALLING_BLOCKS_*` variables.
    ///
    /// Values that do not parse are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_path = lookup("FALLING_BLOCKS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Self {
            rows: parse_var(&lookup, "FALLING_BLOCKS_ROWS").unwrap_or(defaults.rows),
            cols: parse_var(&lookup, "FALLING_BLOCKS_COLS").unwrap_or(defaults.cols),
            tick_ms: parse_var(&lookup, "FALLING_BLOCKS_TICK_MS").unwrap_or(defaults.tick_ms),
            seed: parse_var(&lookup, "FALLING_BLOCKS_SEED"),
            log_path,
        }
    }

    /// Override fields from command-line flags (program name excluded).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--rows" => self.rows = parse_number(flag, value()?)?,
                "--cols" => self.cols = parse_number(flag, value()?)?,
                "--tick-ms" => self.tick_ms = parse_number(flag, value()?)?,
                "--seed" => self.seed = Some(parse_number(flag, value()?)?),
                "--log" => self.log_path = Some(PathBuf::from(value()?)),
                other => bail!("unknown argument: {}\n{}", other, USAGE),
            }
            i += 2;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, n) in [("rows", self.rows), ("cols", self.cols)] {
            if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&n) {
                bail!(
                    "{} must be between {} and {}, got {}",
                    name,
                    MIN_DIMENSION,
                    MAX_DIMENSION,
                    n
                );
            }
        }
        if self.tick_ms < MIN_TICK_MS {
            bail!("tick-ms must be at least {}, got {}", MIN_TICK_MS, self.tick_ms);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, value))
}
