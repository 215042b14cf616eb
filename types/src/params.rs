//! Staking parameters shared by every node applying the staking rules.

use crate::amount::Asset;
use crate::time::SECONDS_PER_DAY;
use serde::{Deserialize, Serialize};

/// Refund cooling-off delay: 3 days.
pub const DEFAULT_REFUND_DELAY_SECS: u64 = 3 * SECONDS_PER_DAY;

/// Activation threshold: 15% of a 1 billion token supply.
pub const DEFAULT_MIN_ACTIVATED_STAKE: Asset = Asset::new(150_000_000 * Asset::UNIT);

/// Parameters of the staking state transition.
///
/// Every node must apply identical values, otherwise re-execution of the
/// same operation diverges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StakingParams {
    /// Seconds between an unstake request and the refund becoming claimable.
    #[serde(default = "default_refund_delay_secs")]
    pub refund_delay_secs: u64,

    /// Minimum total stake participating in voting before undelegation is
    /// allowed at all.
    #[serde(default = "default_min_activated_stake")]
    pub min_activated_stake: Asset,
}

fn default_refund_delay_secs() -> u64 {
    DEFAULT_REFUND_DELAY_SECS
}

fn default_min_activated_stake() -> Asset {
    DEFAULT_MIN_ACTIVATED_STAKE
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            refund_delay_secs: default_refund_delay_secs(),
            min_activated_stake: default_min_activated_stake(),
        }
    }
}
