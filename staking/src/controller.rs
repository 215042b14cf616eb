//! Delegation orchestration.
//!
//! [`DelegationController`] is the only writer of delegation and refund
//! records. Each public operation runs to completion or returns an error;
//! the host ledger discards every tentative write of a failed operation, so
//! no step here undoes an earlier one.

use crate::config::StakingConfig;
use crate::error::StakingError;
use crate::ledger::StakeLedger;
use crate::refund::RefundQueue;
use crate::scheduler::{DeferredAction, RefundScheduler};
use crate::voter::adjust_voter_stake;
use delband_env::{DeferredTask, EnvError, Host};
use delband_store::{DelegationRecord, RefundRequest, StakingStore};
use delband_types::{AccountName, Asset, Timestamp};

const STAKE_MEMO: &str = "stake bandwidth";
const UNSTAKE_MEMO: &str = "unstake";

/// Receipt of one delegation change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StakeChange {
    /// Account the delegation record is booked under.
    pub owner: AccountName,
    pub receiver: AccountName,
    pub delta: Asset,
    /// Delegated amount for `(owner, receiver)` after the change.
    pub delegated: Asset,
    /// Tokens moved from the funding account into stake holding.
    pub paid_in: Asset,
}

pub struct DelegationController<'a, S: StakingStore + ?Sized, H: Host + ?Sized> {
    store: &'a S,
    host: &'a H,
    config: &'a StakingConfig,
}

impl<'a, S: StakingStore + ?Sized, H: Host + ?Sized> DelegationController<'a, S, H> {
    pub fn new(store: &'a S, host: &'a H, config: &'a StakingConfig) -> Self {
        Self {
            store,
            host,
            config,
        }
    }

    /// Stake `quantity` from `from` to `receiver`.
    ///
    /// With `transfer`, `from` pays but the delegation is booked under
    /// `receiver`, who can later withdraw it.
    pub fn delegate(
        &self,
        from: &AccountName,
        receiver: &AccountName,
        quantity: Asset,
        transfer: bool,
    ) -> Result<StakeChange, StakingError> {
        if !quantity.is_positive() {
            return Err(StakingError::NonPositiveStake);
        }
        if transfer && from == receiver {
            return Err(StakingError::TransferToSelf);
        }
        self.apply_change(from, receiver, quantity, transfer)
    }

    /// Withdraw `quantity` of `from`'s delegation to `receiver` into the
    /// refund queue.
    pub fn undelegate(
        &self,
        from: &AccountName,
        receiver: &AccountName,
        quantity: Asset,
    ) -> Result<StakeChange, StakingError> {
        if !quantity.is_positive() {
            return Err(StakingError::NonPositiveUnstake);
        }
        let activated = self.store.get_global_state()?.total_activated_stake;
        let required = self.config.params.min_activated_stake;
        if activated < required {
            return Err(StakingError::ChainNotActivated {
                activated,
                required,
            });
        }
        let delta = quantity.checked_neg().ok_or(StakingError::Overflow)?;
        self.apply_change(from, receiver, delta, false)
    }

    /// Apply a signed stake change from `from` to `receiver`.
    ///
    /// Callers gate the delta first: `delegate` and `undelegate` are the only
    /// entry points.
    fn apply_change(
        &self,
        from: &AccountName,
        receiver: &AccountName,
        delta: Asset,
        transfer: bool,
    ) -> Result<StakeChange, StakingError> {
        self.host.require_auth(from)?;
        if delta.is_zero() {
            return Err(StakingError::ZeroQuantity);
        }

        let funding = from;
        let owner = if transfer { receiver } else { from };

        let delegated = StakeLedger::new(self.store).apply_delta(owner, receiver, delta)?;

        let stake_holding = &self.config.accounts.stake_holding;
        let mut paid_in = Asset::ZERO;
        if funding != stake_holding {
            let refundable = (!transfer && owner == receiver) || delta.is_negative();
            let remaining = if refundable {
                let absorbed =
                    RefundQueue::new(self.store).absorb(owner, delta, self.host.now())?;
                let scheduler = RefundScheduler::new(self.host);
                if absorbed.pending {
                    scheduler.schedule(owner, self.config.params.refund_delay_secs)?;
                } else {
                    scheduler.cancel(owner);
                }
                absorbed.remaining_balance
            } else {
                delta
            };

            if remaining.is_positive() {
                self.host
                    .transfer(funding, stake_holding, remaining, STAKE_MEMO)?;
                paid_in = remaining;
            }
        }

        let voter = adjust_voter_stake(self.store, owner, delta)?;
        if let Some(vesting) = self.config.accounts.vesting_for(owner) {
            vesting.check(voter.staked, self.host.now())?;
        }
        if voter.has_votes() {
            self.host
                .update_votes(owner, voter.proxy.as_ref(), &voter.producers, false)?;
        }

        tracing::info!(
            from = %from,
            owner = %owner,
            receiver = %receiver,
            delta = %delta,
            delegated = %delegated,
            paid_in = %paid_in,
            "stake changed"
        );
        Ok(StakeChange {
            owner: owner.clone(),
            receiver: receiver.clone(),
            delta,
            delegated,
            paid_in,
        })
    }

    /// Pay out `owner`'s matured refund from stake holding.
    pub fn claim(&self, owner: &AccountName) -> Result<RefundRequest, StakingError> {
        self.host.require_auth(owner)?;
        let request = RefundQueue::new(self.store).take_claimable(
            owner,
            self.host.now(),
            self.config.params.refund_delay_secs,
        )?;
        self.host.transfer(
            &self.config.accounts.stake_holding,
            owner,
            request.amount,
            UNSTAKE_MEMO,
        )?;
        RefundScheduler::new(self.host).cancel(owner);
        tracing::info!(owner = %owner, amount = %request.amount, "refund claimed");
        Ok(request)
    }

    /// Execute a deferred task that has come due.
    ///
    /// The task runs with its authorizer's authority only, which must match
    /// the account the action acts for.
    pub fn dispatch_deferred(&self, task: &DeferredTask) -> Result<RefundRequest, StakingError> {
        match DeferredAction::decode(&task.action, &task.payload)? {
            DeferredAction::Refund { owner } => {
                if owner != task.authorizer {
                    return Err(EnvError::MissingAuthority(owner).into());
                }
                tracing::debug!(owner = %owner, "deferred refund fired");
                self.claim(&owner)
            }
        }
    }

    pub fn delegation(
        &self,
        from: &AccountName,
        to: &AccountName,
    ) -> Result<Option<DelegationRecord>, StakingError> {
        StakeLedger::new(self.store).delegation(from, to)
    }

    pub fn delegations_from(
        &self,
        from: &AccountName,
    ) -> Result<Vec<DelegationRecord>, StakingError> {
        StakeLedger::new(self.store).delegations_from(from)
    }

    pub fn refund(&self, owner: &AccountName) -> Result<Option<RefundRequest>, StakingError> {
        RefundQueue::new(self.store).refund(owner)
    }

    /// When `owner`'s pending refund becomes claimable, if there is one.
    pub fn refund_available_at(
        &self,
        owner: &AccountName,
    ) -> Result<Option<Timestamp>, StakingError> {
        let delay = self.config.params.refund_delay_secs;
        Ok(self
            .refund(owner)?
            .map(|r| RefundQueue::<S>::available_at(&r, delay)))
    }
}
