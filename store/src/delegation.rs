use crate::StoreError;
use delband_types::{AccountName, Asset};
use serde::{Deserialize, Serialize};

/// Stake delegated from `from` to back the resources of `to`.
///
/// Every delegator has its own table scope, keyed by recipient, so there is
/// at most one record per `(from, to)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRecord {
    pub from: AccountName,
    pub to: AccountName,
    pub amount: Asset,
}

pub trait DelegationStore {
    fn get_delegation(
        &self,
        from: &AccountName,
        to: &AccountName,
    ) -> Result<Option<DelegationRecord>, StoreError>;

    /// Insert or overwrite the record keyed by `(record.from, record.to)`.
    fn put_delegation(&self, record: &DelegationRecord) -> Result<(), StoreError>;

    fn delete_delegation(&self, from: &AccountName, to: &AccountName) -> Result<(), StoreError>;

    /// All delegations in the `from` scope, ordered by recipient.
    fn delegations_from(&self, from: &AccountName) -> Result<Vec<DelegationRecord>, StoreError>;
}
