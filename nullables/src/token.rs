//! Nullable token ledger: in-memory balances with a transfer log.

use delband_env::{EnvError, TokenLedger};
use delband_types::{AccountName, Asset};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// One successful transfer, as recorded by [`NullTokenLedger`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub from: AccountName,
    pub to: AccountName,
    pub quantity: Asset,
    pub memo: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenState {
    balances: BTreeMap<AccountName, Asset>,
    log: Vec<TransferRecord>,
}

/// A token ledger that enforces balances the way the token contract does.
pub struct NullTokenLedger {
    state: Mutex<TokenState>,
}

impl NullTokenLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TokenState::default()),
        }
    }

    /// Credit `amount` to `account` out of thin air.
    pub fn issue(&self, account: &AccountName, amount: Asset) {
        let mut state = self.state.lock().unwrap();
        let balance = state.balances.entry(account.clone()).or_default();
        *balance = balance
            .checked_add(amount)
            .unwrap_or(Asset::new(i64::MAX));
    }

    pub fn balance(&self, account: &AccountName) -> Asset {
        self.state
            .lock()
            .unwrap()
            .balances
            .get(account)
            .copied()
            .unwrap_or_default()
    }

    /// Every successful transfer in execution order.
    pub fn transfers(&self) -> Vec<TransferRecord> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn snapshot(&self) -> TokenState {
        self.state.lock().unwrap().clone()
    }

    pub fn restore(&self, snapshot: TokenState) {
        *self.state.lock().unwrap() = snapshot;
    }
}

impl Default for NullTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenLedger for NullTokenLedger {
    fn transfer(
        &self,
        from: &AccountName,
        to: &AccountName,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), EnvError> {
        if !quantity.is_positive() {
            return Err(EnvError::Transfer("must transfer positive quantity".into()));
        }
        if from == to {
            return Err(EnvError::Transfer("cannot transfer to self".into()));
        }
        let mut state = self.state.lock().unwrap();
        let available = state.balances.get(from).copied().unwrap_or_default();
        let remaining = available
            .checked_sub(quantity)
            .filter(|r| !r.is_negative())
            .ok_or_else(|| EnvError::OverdrawnBalance {
                account: from.clone(),
                needed: quantity,
                available,
            })?;
        let credited = state
            .balances
            .get(to)
            .copied()
            .unwrap_or_default()
            .checked_add(quantity)
            .ok_or_else(|| EnvError::Transfer("balance overflow".into()))?;
        state.balances.insert(from.clone(), remaining);
        state.balances.insert(to.clone(), credited);
        state.log.push(TransferRecord {
            from: from.clone(),
            to: to.clone(),
            quantity,
            memo: memo.to_string(),
        });
        Ok(())
    }
}
