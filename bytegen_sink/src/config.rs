use anyhow::{anyhow, Result};
use std::env;

pub const ENV_VAR_CHUNK_SIZE: &str = "BYTEGEN_CHUNK_SIZE";
pub const ENV_VAR_IO_BUF_CAPACITY: &str = "BYTEGEN_IO_BUF_CAPACITY";

pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;
pub const DEFAULT_IO_BUF_CAPACITY: usize = 8 * 1024;

/// Sizing knobs for the buffering backends.
///
/// Neither value affects the bytes a sink ends up holding; only how they are grouped
/// ([`crate::ChunkedSink`]) or when they reach the underlying writer ([`crate::IoSink`]).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SinkConfig {
    pub chunk_size: usize,
    pub io_buf_capacity: usize,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            io_buf_capacity: DEFAULT_IO_BUF_CAPACITY,
        }
    }
}

impl SinkConfig {
    /// Defaults, overridden by whichever env vars are set.
    pub fn from_env() -> Result<Self> {
        let dflt = Self::default();
        let conf = Self {
            chunk_size: positive_from_env(ENV_VAR_CHUNK_SIZE, dflt.chunk_size)?,
            io_buf_capacity: positive_from_env(ENV_VAR_IO_BUF_CAPACITY, dflt.io_buf_capacity)?,
        };
        log::debug!("Loaded {conf:?}");
        Ok(conf)
    }
}

fn positive_from_env(var: &str, dflt: usize) -> Result<usize> {
    match env::var(var) {
        Err(env::VarError::NotPresent) => Ok(dflt),
        Err(e) => Err(anyhow!("{var}: {e}")),
        Ok(s) => parse_positive(var, &s),
    }
}

fn parse_positive(var: &str, s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err(anyhow!("{var} must be positive, got {s:?}")),
        Ok(n) => Ok(n),
        Err(e) => Err(anyhow!("{var} must be a positive integer, got {s:?}: {e}")),
    }
}
