//! End-to-end delegation flows over the nullable chain.

use delband_env::Clock;
use delband_nullables::NullChain;
use delband_staking::{DelegationController, ErrorKind, StakingConfig, StakingError};
use delband_store::{DelegationStore, RefundStore, VoterInfo};
use delband_types::{AccountName, Asset};

const START: u64 = 1_600_000_000;
const DELAY: u64 = 259_200;

fn name(s: &str) -> AccountName {
    AccountName::new(s).unwrap()
}

fn activated_chain() -> (NullChain, StakingConfig) {
    delband_utils::try_init_test_tracing();
    let config = StakingConfig::default();
    let chain = NullChain::new(START);
    chain.set_total_activated_stake(config.params.min_activated_stake);
    chain.tokens.issue(&name("alice"), Asset::new(1_000));
    chain.auth.acting_as(&name("alice"));
    (chain, config)
}

/// Run `op` as one atomic ledger operation.
fn run<T>(
    chain: &NullChain,
    config: &StakingConfig,
    op: impl FnOnce(&DelegationController<'_, NullChain, NullChain>) -> Result<T, StakingError>,
) -> Result<T, StakingError> {
    chain.transact(|c| op(&DelegationController::new(c, c, config)))
}

fn delegated(chain: &NullChain, from: &str, to: &str) -> Option<Asset> {
    chain
        .get_delegation(&name(from), &name(to))
        .unwrap()
        .map(|r| r.amount)
}

fn holding_balance(chain: &NullChain, config: &StakingConfig) -> Asset {
    chain.tokens.balance(&config.accounts.stake_holding)
}

#[test]
fn delegating_to_another_account_creates_no_refund() {
    let (chain, config) = activated_chain();
    run(&chain, &config, |ctl| ctl.delegate(&name("alice"), &name("bob"), Asset::new(100), false))
        .unwrap();

    assert_eq!(delegated(&chain, "alice", "bob"), Some(Asset::new(100)));
    assert!(chain.get_refund(&name("alice")).unwrap().is_none());
    assert!(chain.deferred.is_empty());
    assert_eq!(holding_balance(&chain, &config), Asset::new(100));
}

#[test]
fn self_stake_withdraw_and_restake_sequence() {
    let (chain, config) = activated_chain();
    let alice = name("alice");
    run(&chain, &config, |ctl| ctl.delegate(&alice, &alice, Asset::new(50), false)).unwrap();
    assert_eq!(holding_balance(&chain, &config), Asset::new(50));

    chain.clock.advance(100);
    let undelegated_at = chain.clock.now();
    run(&chain, &config, |ctl| ctl.undelegate(&alice, &alice, Asset::new(20))).unwrap();
    assert_eq!(delegated(&chain, "alice", "alice"), Some(Asset::new(30)));
    let refund = chain.get_refund(&alice).unwrap().unwrap();
    assert_eq!(refund.amount, Asset::new(20));
    assert_eq!(refund.request_time, undelegated_at);
    assert_eq!(chain.deferred.len(), 1);

    chain.clock.advance(100);
    run(&chain, &config, |ctl| ctl.delegate(&alice, &alice, Asset::new(5), false)).unwrap();
    assert_eq!(delegated(&chain, "alice", "alice"), Some(Asset::new(35)));
    let refund = chain.get_refund(&alice).unwrap().unwrap();
    assert_eq!(refund.amount, Asset::new(15));
    assert_eq!(refund.request_time, undelegated_at);
    assert_eq!(holding_balance(&chain, &config), Asset::new(50));

    let transfers_before = chain.tokens.transfers().len();
    let change =
        run(&chain, &config, |ctl| ctl.delegate(&alice, &alice, Asset::new(20), false)).unwrap();
    assert_eq!(change.paid_in, Asset::new(5));
    assert_eq!(delegated(&chain, "alice", "alice"), Some(Asset::new(50)));
    assert!(chain.get_refund(&alice).unwrap().is_none());
    assert!(chain.deferred.is_empty());

    let transfers = chain.tokens.transfers();
    assert_eq!(transfers.len(), transfers_before + 1);
    let last = transfers.last().unwrap();
    assert_eq!(last.from, alice);
    assert_eq!(last.to, config.accounts.stake_holding);
    assert_eq!(last.quantity, Asset::new(5));
    assert_eq!(holding_balance(&chain, &config), Asset::new(55));
}

#[test]
fn undelegate_before_activation_changes_nothing() {
    let (chain, config) = activated_chain();
    run(&chain, &config, |ctl| ctl.delegate(&name("alice"), &name("alice"), Asset::new(50), false))
        .unwrap();
    chain.set_total_activated_stake(Asset::ZERO);
    let before = chain.store.snapshot();
    let transfers_before = chain.tokens.transfers();

    let err = run(&chain, &config, |ctl| {
        ctl.undelegate(&name("alice"), &name("alice"), Asset::new(10))
    })
    .unwrap_err();

    assert!(matches!(err, StakingError::ChainNotActivated { .. }));
    assert_eq!(err.kind(), ErrorKind::InputValidation);
    assert_eq!(chain.store.snapshot(), before);
    assert_eq!(chain.tokens.transfers(), transfers_before);
    assert!(chain.deferred.is_empty());
}

#[test]
fn over_withdrawal_aborts_the_whole_operation() {
    let (chain, config) = activated_chain();
    run(&chain, &config, |ctl| ctl.delegate(&name("alice"), &name("bob"), Asset::new(10), false))
        .unwrap();
    let before = chain.store.snapshot();

    let err = run(&chain, &config, |ctl| {
        ctl.undelegate(&name("alice"), &name("bob"), Asset::new(11))
    })
    .unwrap_err();

    assert!(matches!(err, StakingError::InsufficientStaked { .. }));
    assert_eq!(chain.store.snapshot(), before);
    assert!(chain.deferred.is_empty());
}

#[test]
fn failed_vote_update_rolls_back_the_stake_change() {
    let (chain, config) = activated_chain();
    chain.store.insert_voter(VoterInfo {
        owner: name("alice"),
        proxy: Some(name("proxy")),
        producers: Vec::new(),
        staked: 0,
    });
    chain.votes.fail_with("tally unavailable");

    let err = run(&chain, &config, |ctl| {
        ctl.delegate(&name("alice"), &name("alice"), Asset::new(10), false)
    })
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Collaborator);
    assert_eq!(delegated(&chain, "alice", "alice"), None);
    assert_eq!(chain.tokens.balance(&name("alice")), Asset::new(1_000));
}

#[test]
fn insufficient_funds_abort_the_delegation() {
    let (chain, config) = activated_chain();
    let err = run(&chain, &config, |ctl| {
        ctl.delegate(&name("alice"), &name("bob"), Asset::new(1_001), false)
    })
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Collaborator);
    assert_eq!(chain.store.delegation_count(), 0);
}

#[test]
fn transfer_books_the_stake_under_the_receiver() {
    let (chain, config) = activated_chain();
    let change = run(&chain, &config, |ctl| {
        ctl.delegate(&name("alice"), &name("bob"), Asset::new(30), true)
    })
    .unwrap();

    assert_eq!(change.owner, name("bob"));
    assert_eq!(delegated(&chain, "bob", "bob"), Some(Asset::new(30)));
    assert_eq!(delegated(&chain, "alice", "bob"), None);
    assert_eq!(chain.tokens.balance(&name("alice")), Asset::new(970));
    assert!(chain.get_refund(&name("bob")).unwrap().is_none());

    // bob now owns the stake and can withdraw it.
    chain.auth.acting_as(&name("bob"));
    run(&chain, &config, |ctl| ctl.undelegate(&name("bob"), &name("bob"), Asset::new(30))).unwrap();
    assert_eq!(delegated(&chain, "bob", "bob"), None);
    assert_eq!(
        chain.get_refund(&name("bob")).unwrap().map(|r| r.amount),
        Some(Asset::new(30))
    );
}

#[test]
fn manual_claim_respects_the_cooling_off_delay() {
    let (chain, config) = activated_chain();
    let alice = name("alice");
    run(&chain, &config, |ctl| {
        ctl.delegate(&alice, &alice, Asset::new(50), false)?;
        ctl.undelegate(&alice, &alice, Asset::new(20))
    })
    .unwrap();

    chain.clock.advance(DELAY - 1);
    let err = run(&chain, &config, |ctl| ctl.claim(&alice)).unwrap_err();
    assert!(err.to_string().starts_with("refund is not available yet"));
    assert_eq!(err.kind(), ErrorKind::Timing);

    chain.clock.advance(1);
    let paid = run(&chain, &config, |ctl| ctl.claim(&alice)).unwrap();
    assert_eq!(paid.amount, Asset::new(20));
    assert_eq!(chain.tokens.balance(&alice), Asset::new(970));
    assert_eq!(chain.tokens.transfers().last().unwrap().memo, "unstake");
    assert!(chain.get_refund(&alice).unwrap().is_none());
    assert!(chain.deferred.is_empty());

    let err = run(&chain, &config, |ctl| ctl.claim(&alice)).unwrap_err();
    assert_eq!(err, StakingError::RefundNotFound(alice));
}

#[test]
fn deferred_release_pays_out_automatically() {
    let (chain, config) = activated_chain();
    let alice = name("alice");
    run(&chain, &config, |ctl| {
        ctl.delegate(&alice, &alice, Asset::new(50), false)?;
        ctl.undelegate(&alice, &alice, Asset::new(20))
    })
    .unwrap();

    chain.clock.advance(DELAY / 2);
    run(&chain, &config, |ctl| ctl.undelegate(&alice, &alice, Asset::new(5))).unwrap();
    assert_eq!(chain.deferred.len(), 1);

    // The first window has passed but the second withdrawal restarted it.
    chain.clock.advance(DELAY / 2);
    assert!(chain.take_due_tasks().is_empty());

    chain.clock.advance(DELAY / 2);
    let due = chain.take_due_tasks();
    assert_eq!(due.len(), 1);
    chain.auth.acting_as(&due[0].authorizer);
    let paid = run(&chain, &config, |ctl| ctl.dispatch_deferred(&due[0])).unwrap();

    assert_eq!(paid.amount, Asset::new(25));
    assert_eq!(chain.tokens.balance(&alice), Asset::new(975));
    assert!(chain.get_refund(&alice).unwrap().is_none());
    assert!(chain.deferred.is_empty());
}

#[test]
fn deferred_task_cannot_act_for_another_owner() {
    let (chain, config) = activated_chain();
    let alice = name("alice");
    run(&chain, &config, |ctl| {
        ctl.delegate(&alice, &alice, Asset::new(50), false)?;
        ctl.undelegate(&alice, &alice, Asset::new(20))
    })
    .unwrap();
    chain.clock.advance(DELAY);

    let mut task = chain.take_due_tasks().remove(0);
    task.authorizer = name("mallory");
    chain.auth.acting_as(&task.authorizer);
    let err = run(&chain, &config, |ctl| ctl.dispatch_deferred(&task)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert!(chain.get_refund(&alice).unwrap().is_some());
}

#[test]
fn delegating_elsewhere_keeps_the_pending_release() {
    let (chain, config) = activated_chain();
    let alice = name("alice");
    run(&chain, &config, |ctl| {
        ctl.delegate(&alice, &alice, Asset::new(50), false)?;
        ctl.undelegate(&alice, &alice, Asset::new(20))
    })
    .unwrap();
    let due_before = chain.deferred.pending(&alice).unwrap().due;

    chain.clock.advance(100);
    run(&chain, &config, |ctl| {
        ctl.delegate(&alice, &name("bob"), Asset::new(30), false)
    })
    .unwrap();

    assert_eq!(chain.deferred.pending(&alice).unwrap().due, due_before);
    assert_eq!(
        chain.get_refund(&alice).unwrap().map(|r| r.amount),
        Some(Asset::new(20))
    );

    chain.clock.advance(DELAY);
    let due = chain.take_due_tasks();
    assert_eq!(due.len(), 1);
    chain.auth.acting_as(&due[0].authorizer);
    let paid = run(&chain, &config, |ctl| ctl.dispatch_deferred(&due[0])).unwrap();

    assert_eq!(paid.amount, Asset::new(20));
    assert_eq!(chain.tokens.balance(&alice), Asset::new(940));
    assert_eq!(delegated(&chain, "alice", "bob"), Some(Asset::new(30)));
    assert!(chain.get_refund(&alice).unwrap().is_none());
}
