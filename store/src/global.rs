use crate::StoreError;
use delband_types::Asset;
use serde::{Deserialize, Serialize};

/// Chain-wide counters maintained by the vote subsystem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalState {
    /// Stake that has ever participated in producer voting.
    pub total_activated_stake: Asset,
}

pub trait GlobalStore {
    /// Current global state; a store that was never written returns the default.
    fn get_global_state(&self) -> Result<GlobalState, StoreError>;

    fn put_global_state(&self, state: &GlobalState) -> Result<(), StoreError>;
}
