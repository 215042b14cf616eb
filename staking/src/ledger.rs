//! Delegation records keyed by `(from, to)`.

use crate::error::StakingError;
use delband_store::{DelegationRecord, DelegationStore};
use delband_types::{AccountName, Asset};

/// Balance arithmetic over the delegation table.
///
/// A record exists exactly while its amount is positive: the first positive
/// delta creates it and the delta that brings it to zero deletes it.
pub struct StakeLedger<'a, S: DelegationStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DelegationStore + ?Sized> StakeLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Add `delta` to the `(from, to)` delegation and return the new amount.
    ///
    /// Fails without writing when the result would be negative.
    pub fn apply_delta(
        &self,
        from: &AccountName,
        to: &AccountName,
        delta: Asset,
    ) -> Result<Asset, StakingError> {
        let existing = self.store.get_delegation(from, to)?;
        let staked = existing.as_ref().map(|r| r.amount).unwrap_or_default();

        if existing.is_none() && delta.is_zero() {
            return Err(StakingError::InvariantViolation(format!(
                "zero change to absent delegation {from} -> {to}"
            )));
        }

        let amount = staked.checked_add(delta).ok_or(StakingError::Overflow)?;
        if amount.is_negative() {
            return Err(StakingError::InsufficientStaked {
                from: from.clone(),
                to: to.clone(),
                staked,
                delta,
            });
        }

        if amount.is_zero() {
            self.store.delete_delegation(from, to)?;
        } else {
            self.store.put_delegation(&DelegationRecord {
                from: from.clone(),
                to: to.clone(),
                amount,
            })?;
        }
        Ok(amount)
    }

    pub fn delegation(
        &self,
        from: &AccountName,
        to: &AccountName,
    ) -> Result<Option<DelegationRecord>, StakingError> {
        Ok(self.store.get_delegation(from, to)?)
    }

    /// Every delegation made by `from`, ordered by receiver.
    pub fn delegations_from(
        &self,
        from: &AccountName,
    ) -> Result<Vec<DelegationRecord>, StakingError> {
        let mut records = self.store.delegations_from(from)?;
        records.sort_by(|a, b| a.to.cmp(&b.to));
        Ok(records)
    }
}
