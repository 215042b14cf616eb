//! Nullable authorizer: an explicit set of signing accounts.

use delband_env::{Authorizer, EnvError};
use delband_types::AccountName;
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Grants authority only for accounts that were explicitly added as signers.
pub struct NullAuthorizer {
    signers: Mutex<BTreeSet<AccountName>>,
}

impl NullAuthorizer {
    pub fn new() -> Self {
        Self {
            signers: Mutex::new(BTreeSet::new()),
        }
    }

    /// Replace the signer set with exactly `account`.
    pub fn acting_as(&self, account: &AccountName) {
        let mut signers = self.signers.lock().unwrap();
        signers.clear();
        signers.insert(account.clone());
    }

    /// Add `account` to the signer set.
    pub fn add_signer(&self, account: &AccountName) {
        self.signers.lock().unwrap().insert(account.clone());
    }
}

impl Default for NullAuthorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Authorizer for NullAuthorizer {
    fn require_auth(&self, account: &AccountName) -> Result<(), EnvError> {
        if self.signers.lock().unwrap().contains(account) {
            Ok(())
        } else {
            Err(EnvError::MissingAuthority(account.clone()))
        }
    }
}
