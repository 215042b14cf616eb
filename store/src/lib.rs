//! Abstract storage traits for the staking core.
//!
//! Every storage backend (an on-chain table layer, an embedded database,
//! in-memory for testing) implements these traits. The staking core depends
//! only on the traits and treats storage as keyed tables with
//! find/insert/modify/erase semantics.

pub mod delegation;
pub mod error;
pub mod global;
pub mod refund;
pub mod voter;

pub use delegation::{DelegationRecord, DelegationStore};
pub use error::StoreError;
pub use global::{GlobalState, GlobalStore};
pub use refund::{RefundRequest, RefundStore};
pub use voter::{VoterInfo, VoterStore};

/// Every table the staking core reads or writes.
pub trait StakingStore: DelegationStore + RefundStore + VoterStore + GlobalStore {}

impl<T> StakingStore for T where T: DelegationStore + RefundStore + VoterStore + GlobalStore {}
