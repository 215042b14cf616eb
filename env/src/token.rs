use crate::EnvError;
use delband_types::{AccountName, Asset};

/// The token contract's transfer primitive.
pub trait TokenLedger {
    /// Move `quantity` from `from` to `to`. Fails on insufficient balance or
    /// any other token-side rule, which aborts the enclosing operation.
    fn transfer(
        &self,
        from: &AccountName,
        to: &AccountName,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), EnvError>;
}
