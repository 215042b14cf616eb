use delband_types::{AccountName, Asset};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("missing authority of {0}")]
    MissingAuthority(AccountName),

    #[error("overdrawn balance of {account}: need {needed}, have {available}")]
    OverdrawnBalance {
        account: AccountName,
        needed: Asset,
        available: Asset,
    },

    #[error("token transfer failed: {0}")]
    Transfer(String),

    #[error("deferred transaction with sender id {0} already exists")]
    DeferredSlotOccupied(AccountName),

    #[error("vote update failed: {0}")]
    VoteUpdate(String),
}
