//! Nullable store: thread-safe in-memory tables for testing.

use delband_store::{
    DelegationRecord, DelegationStore, GlobalState, GlobalStore, RefundRequest, RefundStore,
    StoreError, VoterInfo, VoterStore,
};
use delband_types::{AccountName, Asset};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Every table the staking core touches, cloned wholesale for snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreState {
    pub delegations: BTreeMap<(AccountName, AccountName), DelegationRecord>,
    pub refunds: BTreeMap<AccountName, RefundRequest>,
    pub voters: BTreeMap<AccountName, VoterInfo>,
    pub global: GlobalState,
}

/// An in-memory implementation of every staking table.
///
/// Tables are `BTreeMap`s so iteration order is deterministic.
pub struct NullStore {
    state: Mutex<StoreState>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    /// Copy of every table.
    pub fn snapshot(&self) -> StoreState {
        self.state.lock().unwrap().clone()
    }

    /// Replace every table with `snapshot`.
    pub fn restore(&self, snapshot: StoreState) {
        *self.state.lock().unwrap() = snapshot;
    }

    /// Set the chain-wide activated stake (normally maintained by voting).
    pub fn set_total_activated_stake(&self, amount: Asset) {
        self.state.lock().unwrap().global.total_activated_stake = amount;
    }

    /// Insert a voter entry as the vote subsystem would.
    pub fn insert_voter(&self, voter: VoterInfo) {
        self.state
            .lock()
            .unwrap()
            .voters
            .insert(voter.owner.clone(), voter);
    }

    pub fn delegation_count(&self) -> usize {
        self.state.lock().unwrap().delegations.len()
    }

    pub fn refund_count(&self) -> usize {
        self.state.lock().unwrap().refunds.len()
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DelegationStore for NullStore {
    fn get_delegation(
        &self,
        from: &AccountName,
        to: &AccountName,
    ) -> Result<Option<DelegationRecord>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .delegations
            .get(&(from.clone(), to.clone()))
            .cloned())
    }

    fn put_delegation(&self, record: &DelegationRecord) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .delegations
            .insert((record.from.clone(), record.to.clone()), record.clone());
        Ok(())
    }

    fn delete_delegation(&self, from: &AccountName, to: &AccountName) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .delegations
            .remove(&(from.clone(), to.clone()))
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("delegation {} -> {}", from, to)))
    }

    fn delegations_from(&self, from: &AccountName) -> Result<Vec<DelegationRecord>, StoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .delegations
            .values()
            .filter(|r| &r.from == from)
            .cloned()
            .collect())
    }
}

impl RefundStore for NullStore {
    fn get_refund(&self, owner: &AccountName) -> Result<Option<RefundRequest>, StoreError> {
        Ok(self.state.lock().unwrap().refunds.get(owner).cloned())
    }

    fn put_refund(&self, request: &RefundRequest) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .refunds
            .insert(request.owner.clone(), request.clone());
        Ok(())
    }

    fn delete_refund(&self, owner: &AccountName) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .refunds
            .remove(owner)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(format!("refund of {}", owner)))
    }
}

impl VoterStore for NullStore {
    fn get_voter(&self, owner: &AccountName) -> Result<Option<VoterInfo>, StoreError> {
        Ok(self.state.lock().unwrap().voters.get(owner).cloned())
    }

    fn put_voter(&self, voter: &VoterInfo) -> Result<(), StoreError> {
        self.state
            .lock()
            .unwrap()
            .voters
            .insert(voter.owner.clone(), voter.clone());
        Ok(())
    }
}

impl GlobalStore for NullStore {
    fn get_global_state(&self) -> Result<GlobalState, StoreError> {
        Ok(self.state.lock().unwrap().global.clone())
    }

    fn put_global_state(&self, state: &GlobalState) -> Result<(), StoreError> {
        self.state.lock().unwrap().global = state.clone();
        Ok(())
    }
}
