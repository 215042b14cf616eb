//! Voter stake mirror.
//!
//! The entries belong to the vote-tallying subsystem. The staking core only
//! adjusts `staked` and reads `proxy`/`producers` to decide whether a vote
//! recomputation is needed.

use crate::StoreError;
use delband_types::AccountName;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterInfo {
    pub owner: AccountName,
    /// Account this voter delegates its vote decisions to.
    #[serde(default)]
    pub proxy: Option<AccountName>,
    /// Producers this voter votes for directly.
    #[serde(default)]
    pub producers: Vec<AccountName>,
    /// Total stake counted for this voter's weight, in raw asset units.
    pub staked: i64,
}

impl VoterInfo {
    pub fn new(owner: AccountName) -> Self {
        Self {
            owner,
            proxy: None,
            producers: Vec::new(),
            staked: 0,
        }
    }

    /// Whether a change in stake must be propagated to the vote tally.
    pub fn has_votes(&self) -> bool {
        self.proxy.is_some() || !self.producers.is_empty()
    }
}

pub trait VoterStore {
    fn get_voter(&self, owner: &AccountName) -> Result<Option<VoterInfo>, StoreError>;

    fn put_voter(&self, voter: &VoterInfo) -> Result<(), StoreError>;
}
