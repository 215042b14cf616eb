//! Stake adjustments on the voter mirror.

use crate::error::StakingError;
use delband_store::{VoterInfo, VoterStore};
use delband_types::{AccountName, Asset};

/// Add `delta` to `owner`'s voting stake, creating the entry on first use.
///
/// Returns the updated entry. A negative total fails without writing.
pub(crate) fn adjust_voter_stake<S: VoterStore + ?Sized>(
    store: &S,
    owner: &AccountName,
    delta: Asset,
) -> Result<VoterInfo, StakingError> {
    let mut voter = store
        .get_voter(owner)?
        .unwrap_or_else(|| VoterInfo::new(owner.clone()));
    voter.staked = voter
        .staked
        .checked_add(delta.raw())
        .ok_or(StakingError::Overflow)?;
    if voter.staked < 0 {
        return Err(StakingError::NegativeVoterStake(owner.clone()));
    }
    store.put_voter(&voter)?;
    Ok(voter)
}
