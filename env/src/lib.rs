//! Host environment traits for the staking core.
//!
//! The staking core never performs authorization, token movement, vote
//! tallying or timekeeping itself. It calls out to these collaborators, which
//! the surrounding ledger provides. Deterministic implementations for tests
//! live in `delband-nullables`.

pub mod auth;
pub mod clock;
pub mod deferred;
pub mod error;
pub mod token;
pub mod votes;

pub use auth::Authorizer;
pub use clock::Clock;
pub use deferred::{DeferredExecutor, DeferredTask};
pub use error::EnvError;
pub use token::TokenLedger;
pub use votes::VoteTally;

/// Every collaborator the staking core calls out to.
pub trait Host: Clock + Authorizer + TokenLedger + DeferredExecutor + VoteTally {}

impl<T> Host for T where T: Clock + Authorizer + TokenLedger + DeferredExecutor + VoteTally {}
