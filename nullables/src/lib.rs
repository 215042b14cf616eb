//! Nullable infrastructure for deterministic testing.
//!
//! Every external dependency of the staking core (clock, authorization,
//! storage, token ledger, deferred execution, vote tally) is abstracted behind
//! a trait. This crate provides test-friendly implementations that:
//! - Return deterministic values and iterate in key order
//! - Can be controlled programmatically
//! - Never touch the filesystem or network
//!
//! [`NullChain`] bundles all of them into one execution environment with
//! all-or-nothing semantics, standing in for the ledger that discards every
//! tentative write of a failed operation.

pub mod auth;
pub mod chain;
pub mod clock;
pub mod deferred;
pub mod store;
pub mod token;
pub mod votes;

pub use auth::NullAuthorizer;
pub use chain::NullChain;
pub use clock::NullClock;
pub use deferred::{NullDeferredQueue, ScheduledTask};
pub use store::NullStore;
pub use token::{NullTokenLedger, TransferRecord};
pub use votes::{NullVoteTally, VoteUpdate};
