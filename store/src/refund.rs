//! Pending refund storage trait.

use crate::StoreError;
use delband_types::{AccountName, Asset, Timestamp};
use serde::{Deserialize, Serialize};

/// Stake waiting out the cooling-off delay before it is returned to `owner`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub owner: AccountName,
    /// Start of the cooling-off window. Reset whenever the pending amount grows.
    pub request_time: Timestamp,
    pub amount: Asset,
}

/// One refund record per owner, keyed by owner.
pub trait RefundStore {
    fn get_refund(&self, owner: &AccountName) -> Result<Option<RefundRequest>, StoreError>;

    fn put_refund(&self, request: &RefundRequest) -> Result<(), StoreError>;

    fn delete_refund(&self, owner: &AccountName) -> Result<(), StoreError>;
}
