//! Staking errors.
//!
//! Every error aborts the whole operation. Display strings are the condition
//! messages surfaced to the caller.

use delband_env::EnvError;
use delband_store::StoreError;
use delband_types::{AccountName, Asset, Timestamp};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StakingError {
    #[error("should stake non-zero amount")]
    ZeroQuantity,

    #[error("must stake a positive amount")]
    NonPositiveStake,

    #[error("must unstake a positive amount")]
    NonPositiveUnstake,

    #[error("cannot use transfer flag if delegating to self")]
    TransferToSelf,

    #[error(
        "cannot undelegate bandwidth until the chain is activated \
         (activated stake {activated}, required {required})"
    )]
    ChainNotActivated { activated: Asset, required: Asset },

    #[error("insufficient staked: {from} -> {to} holds {staked}, change of {delta}")]
    InsufficientStaked {
        from: AccountName,
        to: AccountName,
        staked: Asset,
        delta: Asset,
    },

    #[error("negative refund amount for {0}")]
    NegativeRefund(AccountName),

    #[error("stake for voting cannot be negative: {0}")]
    NegativeVoterStake(AccountName),

    #[error("{account} can only claim their tokens over the vesting period: staked {staked}, locked {locked}")]
    VestingViolation {
        account: AccountName,
        staked: Asset,
        locked: Asset,
    },

    #[error("refund request not found for {0}")]
    RefundNotFound(AccountName),

    #[error("refund is not available yet for {owner}: claimable at {available_at}")]
    RefundNotAvailable {
        owner: AccountName,
        available_at: Timestamp,
    },

    #[error("unknown deferred action {0:?}")]
    UnknownDeferredAction(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    #[error("arithmetic overflow in stake accounting")]
    Overflow,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failure classes an operation can abort with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected arguments or an unmet chain precondition; nothing was touched.
    InputValidation,
    /// A balance went negative after arithmetic. Indicates a logic defect.
    InvariantViolation,
    Authorization,
    /// Claim attempted inside the cooling-off window.
    Timing,
    Vesting,
    /// The token ledger or vote tally refused the request.
    Collaborator,
    Storage,
}

impl StakingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroQuantity
            | Self::NonPositiveStake
            | Self::NonPositiveUnstake
            | Self::TransferToSelf
            | Self::ChainNotActivated { .. }
            | Self::InsufficientStaked { .. }
            | Self::RefundNotFound(_)
            | Self::UnknownDeferredAction(_)
            | Self::Config(_) => ErrorKind::InputValidation,
            Self::NegativeRefund(_)
            | Self::NegativeVoterStake(_)
            | Self::InvariantViolation(_)
            | Self::Overflow => ErrorKind::InvariantViolation,
            Self::RefundNotAvailable { .. } => ErrorKind::Timing,
            Self::VestingViolation { .. } => ErrorKind::Vesting,
            Self::Env(EnvError::MissingAuthority(_)) => ErrorKind::Authorization,
            Self::Env(_) => ErrorKind::Collaborator,
            Self::Store(_) => ErrorKind::Storage,
        }
    }
}
