//! Per-owner pending refunds.
//!
//! Withdrawn stake is parked in a single refund record per owner until the
//! cooling-off delay has passed. Further withdrawals merge into the record and
//! restart its clock; re-staking drains the record before any new tokens have
//! to be paid in.

use crate::error::StakingError;
use delband_store::{RefundRequest, RefundStore};
use delband_types::{AccountName, Asset, Timestamp};

/// Outcome of [`RefundQueue::absorb`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absorbed {
    /// Portion of a stake increase the pending refund could not cover. The
    /// caller pays it in by token transfer.
    pub remaining_balance: Asset,
    /// Whether a refund record still exists for the owner.
    pub pending: bool,
}

pub struct RefundQueue<'a, S: RefundStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RefundStore + ?Sized> RefundQueue<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Apply a signed stake change to `owner`'s pending refund.
    ///
    /// A negative amount is a withdrawal and grows the refund, restarting the
    /// cooling-off clock at `now`. A positive amount is re-staked out of the
    /// refund first; whatever the refund cannot cover is returned as
    /// `remaining_balance`.
    pub fn absorb(
        &self,
        owner: &AccountName,
        signed_amount: Asset,
        now: Timestamp,
    ) -> Result<Absorbed, StakingError> {
        let Some(mut request) = self.store.get_refund(owner)? else {
            if !signed_amount.is_negative() {
                return Ok(Absorbed {
                    remaining_balance: signed_amount,
                    pending: false,
                });
            }
            let amount = signed_amount.checked_neg().ok_or(StakingError::Overflow)?;
            self.store.put_refund(&RefundRequest {
                owner: owner.clone(),
                request_time: now,
                amount,
            })?;
            tracing::debug!(owner = %owner, amount = %amount, "refund opened");
            return Ok(Absorbed {
                remaining_balance: Asset::ZERO,
                pending: true,
            });
        };

        if request.amount.is_negative() {
            return Err(StakingError::NegativeRefund(owner.clone()));
        }
        if signed_amount.is_negative() {
            request.request_time = now;
        }
        let mut amount = request
            .amount
            .checked_sub(signed_amount)
            .ok_or(StakingError::Overflow)?;
        let mut remaining_balance = Asset::ZERO;
        if amount.is_negative() {
            remaining_balance = -amount;
            amount = Asset::ZERO;
        }
        // Unreachable after the clamp; kept as the stored-record invariant.
        if amount.is_negative() {
            return Err(StakingError::NegativeRefund(owner.clone()));
        }
        request.amount = amount;

        let pending = !amount.is_zero();
        if pending {
            self.store.put_refund(&request)?;
        } else {
            self.store.delete_refund(owner)?;
        }
        tracing::debug!(
            owner = %owner,
            amount = %amount,
            remaining = %remaining_balance,
            "refund updated"
        );
        Ok(Absorbed {
            remaining_balance,
            pending,
        })
    }

    pub fn refund(&self, owner: &AccountName) -> Result<Option<RefundRequest>, StakingError> {
        Ok(self.store.get_refund(owner)?)
    }

    /// Earliest time `request` can be claimed.
    pub fn available_at(request: &RefundRequest, delay_secs: u64) -> Timestamp {
        request.request_time.saturating_add_secs(delay_secs)
    }

    /// Remove and return `owner`'s refund once its cooling-off delay is over.
    pub fn take_claimable(
        &self,
        owner: &AccountName,
        now: Timestamp,
        delay_secs: u64,
    ) -> Result<RefundRequest, StakingError> {
        let request = self
            .store
            .get_refund(owner)?
            .ok_or_else(|| StakingError::RefundNotFound(owner.clone()))?;
        if !request.request_time.has_expired(delay_secs, now) {
            return Err(StakingError::RefundNotAvailable {
                owner: owner.clone(),
                available_at: Self::available_at(&request, delay_secs),
            });
        }
        if request.amount.is_negative() {
            return Err(StakingError::NegativeRefund(owner.clone()));
        }
        self.store.delete_refund(owner)?;
        Ok(request)
    }
}
