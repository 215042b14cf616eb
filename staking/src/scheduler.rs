//! Deferred auto-release of pending refunds.

use crate::error::StakingError;
use delband_env::{DeferredExecutor, DeferredTask};
use delband_types::AccountName;
use serde::{Deserialize, Serialize};

/// Action name a refund release task invokes.
pub const REFUND_ACTION: &str = "refund";

/// Actions the staking core schedules for later execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Claim `owner`'s matured refund.
    Refund { owner: AccountName },
}

impl DeferredAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refund { .. } => REFUND_ACTION,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, StakingError> {
        bincode::serialize(self).map_err(|e| StakingError::InvariantViolation(e.to_string()))
    }

    /// Decode the payload of a fired task named `action`.
    pub fn decode(action: &str, payload: &[u8]) -> Result<Self, StakingError> {
        let decoded: Self = bincode::deserialize(payload)
            .map_err(|e| StakingError::UnknownDeferredAction(format!("{action}: {e}")))?;
        if decoded.name() != action {
            return Err(StakingError::UnknownDeferredAction(action.to_string()));
        }
        Ok(decoded)
    }
}

/// Keeps at most one pending release task per owner.
///
/// The task slot is keyed by the owner, so every schedule replaces whatever
/// was there before.
pub struct RefundScheduler<'a, H: DeferredExecutor + ?Sized> {
    host: &'a H,
}

impl<'a, H: DeferredExecutor + ?Sized> RefundScheduler<'a, H> {
    pub fn new(host: &'a H) -> Self {
        Self { host }
    }

    /// Replace `owner`'s pending release with one firing after `delay_secs`.
    pub fn schedule(&self, owner: &AccountName, delay_secs: u64) -> Result<(), StakingError> {
        self.host.cancel_deferred(owner);
        let action = DeferredAction::Refund {
            owner: owner.clone(),
        };
        let task = DeferredTask {
            sender_id: owner.clone(),
            payer: owner.clone(),
            authorizer: owner.clone(),
            action: action.name().to_string(),
            payload: action.encode()?,
            delay_secs,
        };
        self.host.send_deferred(task, true)?;
        tracing::debug!(owner = %owner, delay_secs, "refund release scheduled");
        Ok(())
    }

    /// Drop `owner`'s pending release, if any.
    pub fn cancel(&self, owner: &AccountName) {
        if self.host.cancel_deferred(owner) {
            tracing::debug!(owner = %owner, "refund release cancelled");
        }
    }
}
