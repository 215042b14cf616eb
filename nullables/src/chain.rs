//! Nullable chain: every collaborator behind one all-or-nothing boundary.

use crate::auth::NullAuthorizer;
use crate::clock::NullClock;
use crate::deferred::{NullDeferredQueue, ScheduledTask};
use crate::store::{NullStore, StoreState};
use crate::token::{NullTokenLedger, TokenState};
use crate::votes::{NullVoteTally, VoteUpdate};
use delband_env::{
    Authorizer, Clock, DeferredExecutor, DeferredTask, EnvError, TokenLedger, VoteTally,
};
use delband_store::{
    DelegationRecord, DelegationStore, GlobalState, GlobalStore, RefundRequest, RefundStore,
    StoreError, VoterInfo, VoterStore,
};
use delband_types::{AccountName, Asset, Timestamp};
use std::collections::BTreeMap;

/// Saved state of every mutable collaborator.
struct Checkpoint {
    store: StoreState,
    tokens: TokenState,
    deferred: BTreeMap<AccountName, ScheduledTask>,
    votes: Vec<VoteUpdate>,
}

/// An in-memory ledger: storage, token balances, deferred queue, vote tally,
/// clock and signer set.
///
/// It implements every store and host trait, so one `NullChain` serves as both
/// the store and the host of a staking controller.
pub struct NullChain {
    pub clock: NullClock,
    pub auth: NullAuthorizer,
    pub store: NullStore,
    pub tokens: NullTokenLedger,
    pub deferred: NullDeferredQueue,
    pub votes: NullVoteTally,
}

impl NullChain {
    pub fn new(initial_secs: u64) -> Self {
        Self {
            clock: NullClock::new(initial_secs),
            auth: NullAuthorizer::new(),
            store: NullStore::new(),
            tokens: NullTokenLedger::new(),
            deferred: NullDeferredQueue::new(),
            votes: NullVoteTally::new(),
        }
    }

    /// Run `op` as one ledger operation: when it returns `Err`, every write it
    /// made to storage, balances, the deferred queue and the vote tally is
    /// discarded.
    pub fn transact<T, E>(&self, op: impl FnOnce(&Self) -> Result<T, E>) -> Result<T, E> {
        let checkpoint = self.checkpoint();
        let result = op(self);
        if result.is_err() {
            self.restore(checkpoint);
        }
        result
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            store: self.store.snapshot(),
            tokens: self.tokens.snapshot(),
            deferred: self.deferred.snapshot(),
            votes: self.votes.snapshot(),
        }
    }

    fn restore(&self, checkpoint: Checkpoint) {
        self.store.restore(checkpoint.store);
        self.tokens.restore(checkpoint.tokens);
        self.deferred.restore(checkpoint.deferred);
        self.votes.restore(checkpoint.votes);
    }

    /// Deferred tasks whose delay has elapsed at the current clock time.
    pub fn take_due_tasks(&self) -> Vec<DeferredTask> {
        self.deferred.take_due(self.clock.now())
    }

    pub fn set_total_activated_stake(&self, amount: Asset) {
        self.store.set_total_activated_stake(amount);
    }
}

// ── Store traits ───────────────────────────────────────────────────────

impl DelegationStore for NullChain {
    fn get_delegation(
        &self,
        from: &AccountName,
        to: &AccountName,
    ) -> Result<Option<DelegationRecord>, StoreError> {
        self.store.get_delegation(from, to)
    }

    fn put_delegation(&self, record: &DelegationRecord) -> Result<(), StoreError> {
        self.store.put_delegation(record)
    }

    fn delete_delegation(&self, from: &AccountName, to: &AccountName) -> Result<(), StoreError> {
        self.store.delete_delegation(from, to)
    }

    fn delegations_from(&self, from: &AccountName) -> Result<Vec<DelegationRecord>, StoreError> {
        self.store.delegations_from(from)
    }
}

impl RefundStore for NullChain {
    fn get_refund(&self, owner: &AccountName) -> Result<Option<RefundRequest>, StoreError> {
        self.store.get_refund(owner)
    }

    fn put_refund(&self, request: &RefundRequest) -> Result<(), StoreError> {
        self.store.put_refund(request)
    }

    fn delete_refund(&self, owner: &AccountName) -> Result<(), StoreError> {
        self.store.delete_refund(owner)
    }
}

impl VoterStore for NullChain {
    fn get_voter(&self, owner: &AccountName) -> Result<Option<VoterInfo>, StoreError> {
        self.store.get_voter(owner)
    }

    fn put_voter(&self, voter: &VoterInfo) -> Result<(), StoreError> {
        self.store.put_voter(voter)
    }
}

impl GlobalStore for NullChain {
    fn get_global_state(&self) -> Result<GlobalState, StoreError> {
        self.store.get_global_state()
    }

    fn put_global_state(&self, state: &GlobalState) -> Result<(), StoreError> {
        self.store.put_global_state(state)
    }
}

// ── Host traits ────────────────────────────────────────────────────────

impl Clock for NullChain {
    fn now(&self) -> Timestamp {
        self.clock.now()
    }
}

impl Authorizer for NullChain {
    fn require_auth(&self, account: &AccountName) -> Result<(), EnvError> {
        self.auth.require_auth(account)
    }
}

impl TokenLedger for NullChain {
    fn transfer(
        &self,
        from: &AccountName,
        to: &AccountName,
        quantity: Asset,
        memo: &str,
    ) -> Result<(), EnvError> {
        self.tokens.transfer(from, to, quantity, memo)
    }
}

impl DeferredExecutor for NullChain {
    fn send_deferred(&self, task: DeferredTask, replace_existing: bool) -> Result<(), EnvError> {
        self.deferred.schedule(task, self.clock.now(), replace_existing)
    }

    fn cancel_deferred(&self, sender_id: &AccountName) -> bool {
        self.deferred.cancel(sender_id)
    }
}

impl VoteTally for NullChain {
    fn update_votes(
        &self,
        voter: &AccountName,
        proxy: Option<&AccountName>,
        producers: &[AccountName],
        voting: bool,
    ) -> Result<(), EnvError> {
        self.votes.update_votes(voter, proxy, producers, voting)
    }
}
