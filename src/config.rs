//! Runtime configuration and the embedded deployment manifest

use std::collections::HashMap;

use alloy::primitives::Address;
use anyhow::{anyhow, Context};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";
const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;
/// 2021-01-15 00:00:00 UTC, the mainnet boardroom launch
const DEFAULT_BOARDROOM_LAUNCH_TS: i64 = 1_610_668_800;
const DEFAULT_ALLOCATION_PERIOD_SECS: i64 = 86_400;

/// Tracker configuration, read from the environment with sensible defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub poll_interval_ms: u64,
    /// Wallet whose boardroom balances the dashboard displays
    pub operator: Address,
    pub boardroom_launches_at: DateTime<Utc>,
    /// Gap between seigniorage allocations
    pub allocation_period: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());

        let poll_interval_ms = match std::env::var("POLL_INTERVAL_MS") {
            Ok(raw) => raw.parse().context("POLL_INTERVAL_MS must be an integer")?,
            Err(_) => DEFAULT_POLL_INTERVAL_MS,
        };

        let operator = match std::env::var("OPERATOR_ADDRESS") {
            Ok(raw) => raw.parse().context("OPERATOR_ADDRESS is not a valid address")?,
            Err(_) => Address::ZERO,
        };

        let launch_ts = match std::env::var("BOARDROOM_LAUNCH_TS") {
            Ok(raw) => raw.parse().context("BOARDROOM_LAUNCH_TS must be unix seconds")?,
            Err(_) => DEFAULT_BOARDROOM_LAUNCH_TS,
        };
        let boardroom_launches_at = DateTime::from_timestamp(launch_ts, 0)
            .ok_or_else(|| anyhow!("BOARDROOM_LAUNCH_TS {} is out of range", launch_ts))?;

        let period_secs = match std::env::var("ALLOCATION_PERIOD_SECS") {
            Ok(raw) => raw.parse().context("ALLOCATION_PERIOD_SECS must be an integer")?,
            Err(_) => DEFAULT_ALLOCATION_PERIOD_SECS,
        };

        Ok(Self {
            rpc_url,
            poll_interval_ms,
            operator,
            boardroom_launches_at,
            allocation_period: Duration::seconds(period_secs),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DeploymentEntry {
    address: String,
}

/// Contract addresses for one deployment of the protocol
#[derive(Debug, Clone)]
pub struct Deployments {
    entries: HashMap<String, DeploymentEntry>,
}

impl Deployments {
    /// The embedded mainnet manifest
    pub fn mainnet() -> anyhow::Result<Self> {
        Self::from_json(include_str!("deployments.mainnet.json"))
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let entries = serde_json::from_str(raw).context("invalid deployment manifest")?;
        Ok(Self { entries })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Address of a deployed contract by manifest name
    pub fn address(&self, name: &str) -> anyhow::Result<Address> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| anyhow!("no deployment entry for {}", name))?;
        entry
            .address
            .parse()
            .with_context(|| format!("bad address in deployment entry {}", name))
    }
}
