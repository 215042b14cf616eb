//! Nullable vote tally: records notifications, optionally fails them.

use delband_env::{EnvError, VoteTally};
use delband_types::AccountName;
use std::sync::Mutex;

/// One `update_votes` notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteUpdate {
    pub voter: AccountName,
    pub proxy: Option<AccountName>,
    pub producers: Vec<AccountName>,
    pub voting: bool,
}

pub struct NullVoteTally {
    updates: Mutex<Vec<VoteUpdate>>,
    failure: Mutex<Option<String>>,
}

impl NullVoteTally {
    pub fn new() -> Self {
        Self {
            updates: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    /// Make every subsequent `update_votes` call fail with `reason`.
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(reason.into());
    }

    pub fn updates(&self) -> Vec<VoteUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn snapshot(&self) -> Vec<VoteUpdate> {
        self.updates()
    }

    pub fn restore(&self, snapshot: Vec<VoteUpdate>) {
        *self.updates.lock().unwrap() = snapshot;
    }
}

impl Default for NullVoteTally {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteTally for NullVoteTally {
    fn update_votes(
        &self,
        voter: &AccountName,
        proxy: Option<&AccountName>,
        producers: &[AccountName],
        voting: bool,
    ) -> Result<(), EnvError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(EnvError::VoteUpdate(reason));
        }
        self.updates.lock().unwrap().push(VoteUpdate {
            voter: voter.clone(),
            proxy: proxy.cloned(),
            producers: producers.to_vec(),
            voting,
        });
        Ok(())
    }
}
