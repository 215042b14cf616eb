//! Deferred (delayed, self-executing) transactions.

use crate::EnvError;
use delband_types::AccountName;
use serde::{Deserialize, Serialize};

/// A one-shot action the host executes after `delay_secs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeferredTask {
    /// Slot key. A sender id holds at most one pending task.
    pub sender_id: AccountName,
    /// Account billed for the task's storage while it is pending.
    pub payer: AccountName,
    /// The only authority the action executes with.
    pub authorizer: AccountName,
    /// Name of the action to invoke when the task fires.
    pub action: String,
    /// Encoded action arguments.
    pub payload: Vec<u8>,
    pub delay_secs: u64,
}

pub trait DeferredExecutor {
    /// Register `task` in its sender id's slot.
    ///
    /// With `replace_existing` false an occupied slot is an error; with true
    /// the previous task is dropped.
    fn send_deferred(&self, task: DeferredTask, replace_existing: bool) -> Result<(), EnvError>;

    /// Drop the pending task for `sender_id`. Returns whether one existed.
    fn cancel_deferred(&self, sender_id: &AccountName) -> bool;
}
