//! Staking configuration with TOML file support.

use delband_types::{AccountName, StakingParams};
use delband_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::vesting::VestingSchedule;
use crate::StakingError;

/// Accounts the staking rules treat specially.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialAccounts {
    /// Holds every staked token. Deposits go in, refunds come out, and as a
    /// funding account it skips refund processing.
    #[serde(default = "default_stake_holding")]
    pub stake_holding: AccountName,

    /// Accounts whose stake may only shrink along a vesting schedule.
    #[serde(default)]
    pub vesting: Vec<VestingSchedule>,
}

impl SpecialAccounts {
    pub fn vesting_for(&self, account: &AccountName) -> Option<&VestingSchedule> {
        self.vesting.iter().find(|v| &v.account == account)
    }
}

impl Default for SpecialAccounts {
    fn default() -> Self {
        Self {
            stake_holding: default_stake_holding(),
            vesting: Vec::new(),
        }
    }
}

/// Configuration for a staking deployment.
///
/// Can be loaded from a TOML file via [`StakingConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingConfig {
    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, e.g. "info" or "warn,delband_staking=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub params: StakingParams,

    #[serde(default)]
    pub accounts: SpecialAccounts,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_stake_holding() -> AccountName {
    AccountName::from_static("eosio.stake")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl StakingConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, StakingError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StakingError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, StakingError> {
        toml::from_str(s).map_err(|e| StakingError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, StakingError> {
        toml::to_string_pretty(self).map_err(|e| StakingError::Config(e.to_string()))
    }
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            params: StakingParams::default(),
            accounts: SpecialAccounts::default(),
        }
    }
}
