use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

// Defaults match the benchmark host the measurements were taken on:
// 32 KiB L1d, 256 KiB L2, 9 MiB shared L3. The page threshold is the
// array size where TLB misses start dominating the latency curve.
pub const DEFAULT_L1_BYTES: u64 = 32 * 1024;
pub const DEFAULT_L2_BYTES: u64 = 256 * 1024;
pub const DEFAULT_L3_BYTES: u64 = 9 * 1024 * 1024;
pub const DEFAULT_PAGE_THRESHOLD_BYTES: u64 = 2_414_600_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub page_threshold_bytes: u64,
    pub l1_bytes: u64,
    pub l2_bytes: u64,
    pub l3_bytes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let input_path = env::var("MEMLAT_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("results.csv"));

        let page_threshold_bytes = env::var("MEMLAT_PAGE_THRESHOLD_BYTES")
            .unwrap_or_else(|_| DEFAULT_PAGE_THRESHOLD_BYTES.to_string())
            .parse::<u64>()
            .context("Failed to parse MEMLAT_PAGE_THRESHOLD_BYTES")?;

        let l1_bytes = env::var("MEMLAT_L1_BYTES")
            .unwrap_or_else(|_| DEFAULT_L1_BYTES.to_string())
            .parse::<u64>()
            .context("Failed to parse MEMLAT_L1_BYTES")?;

        let l2_bytes = env::var("MEMLAT_L2_BYTES")
            .unwrap_or_else(|_| DEFAULT_L2_BYTES.to_string())
            .parse::<u64>()
            .context("Failed to parse MEMLAT_L2_BYTES")?;

        let l3_bytes = env::var("MEMLAT_L3_BYTES")
            .unwrap_or_else(|_| DEFAULT_L3_BYTES.to_string())
            .parse::<u64>()
            .context("Failed to parse MEMLAT_L3_BYTES")?;

        Ok(Config {
            input_path,
            page_threshold_bytes,
            l1_bytes,
            l2_bytes,
            l3_bytes,
        })
    }
}
