//! Stake delegation and time-locked refunds.
//!
//! Accounts delegate stake to themselves or to others to back resource
//! allowances. Withdrawn stake waits out a cooling-off delay in a per-owner
//! refund record before it is paid back, and a deferred task releases it
//! automatically once the delay has passed.
//!
//! Components, leaf first:
//! - [`StakeLedger`]: `(from, to)` delegation records and their arithmetic
//! - [`RefundQueue`]: the per-owner pending refund and its cooling-off clock
//! - [`RefundScheduler`]: the owner's single deferred auto-release task
//! - [`DelegationController`]: `delegate`, `undelegate` and `claim`
//!
//! Every operation either succeeds as a whole or returns an error; discarding
//! the tentative writes of a failed operation is the host ledger's job.

pub mod config;
pub mod controller;
pub mod error;
pub mod ledger;
pub mod refund;
pub mod scheduler;
pub mod vesting;
mod voter;

pub use config::{SpecialAccounts, StakingConfig};
pub use controller::{DelegationController, StakeChange};
pub use error::{ErrorKind, StakingError};
pub use ledger::StakeLedger;
pub use refund::{Absorbed, RefundQueue};
pub use scheduler::{DeferredAction, RefundScheduler};
pub use vesting::VestingSchedule;
