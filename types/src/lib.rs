//! Fundamental types for the delegated-bandwidth staking core.
//!
//! This crate defines the value types shared across every other crate in the
//! workspace: account names, asset quantities, timestamps, and staking
//! parameters.

pub mod account;
pub mod amount;
pub mod error;
pub mod params;
pub mod time;

pub use account::AccountName;
pub use amount::Asset;
pub use error::TypesError;
pub use params::StakingParams;
pub use time::{Timestamp, SECONDS_PER_DAY, SECONDS_PER_YEAR};
