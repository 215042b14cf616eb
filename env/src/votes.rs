use crate::EnvError;
use delband_types::AccountName;

/// The producer-vote tally.
pub trait VoteTally {
    /// Recompute the vote weight of `voter` after its stake changed.
    ///
    /// `voting` is true only when the voter itself is casting a new vote; stake
    /// changes always pass false.
    fn update_votes(
        &self,
        voter: &AccountName,
        proxy: Option<&AccountName>,
        producers: &[AccountName],
        voting: bool,
    ) -> Result<(), EnvError>;
}
