use log::LevelFilter;
use rand::Rng;
use std::env;

pub const DEFAULT_OPS: usize = 10_000;

/// How a test run is driven.
///
/// Every field can be overridden from the environment so a failing seed can
/// be replayed without touching the code:
///
/// - `TESTER_SEED`: rng seed, random when unset
/// - `TESTER_OPS`: number of operations per run
/// - `TESTER_LOG`: log level (`trace`, `debug`, ...), logging is off when unset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesterConfig {
    pub seed: Option<u64>,
    pub ops: usize,
    pub log_level: Option<LevelFilter>,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            ops: DEFAULT_OPS,
            log_level: None,
        }
    }
}

impl TesterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// unparsable values fall back to the defaults
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let default = Self::default();
        Self {
            seed: lookup("TESTER_SEED").and_then(|s| s.trim().parse().ok()),
            ops: lookup("TESTER_OPS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(default.ops),
            log_level: lookup("TESTER_LOG").and_then(|s| parse_level(&s)),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_ops(mut self, ops: usize) -> Self {
        self.ops = ops;
        self
    }

    /// the configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::thread_rng().gen())
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}
