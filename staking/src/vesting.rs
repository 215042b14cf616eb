//! Linear vesting caps on stake withdrawal.
//!
//! A vesting-restricted account may only withdraw the claimable share of its
//! allocation: the share grows linearly from `start` over `duration_secs`,
//! and the account's voting stake must always cover the still-locked rest.

use crate::error::StakingError;
use delband_types::{AccountName, Asset, Timestamp, SECONDS_PER_YEAR};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingSchedule {
    pub account: AccountName,
    pub start: Timestamp,
    pub duration_secs: u64,
    pub total_allocation: Asset,
}

impl VestingSchedule {
    /// The `b1` allocation: 100 million tokens over ten years from
    /// 2018-06-01T00:00:00Z.
    pub fn reference_b1() -> Self {
        Self {
            account: AccountName::from_static("b1"),
            start: Timestamp::new(1_527_811_200),
            duration_secs: 10 * SECONDS_PER_YEAR,
            total_allocation: Asset::new(100_000_000 * Asset::UNIT),
        }
    }

    /// Portion of the allocation released at `now`.
    pub fn claimable(&self, now: Timestamp) -> Asset {
        if self.duration_secs == 0 {
            return self.total_allocation;
        }
        let elapsed = self.start.elapsed_since(now).min(self.duration_secs);
        let released = i128::from(self.total_allocation.raw()) * i128::from(elapsed)
            / i128::from(self.duration_secs);
        // |released| <= |total_allocation| since elapsed <= duration.
        Asset::new(released as i64)
    }

    /// Portion of the allocation still locked at `now`.
    pub fn locked(&self, now: Timestamp) -> Asset {
        let locked =
            i128::from(self.total_allocation.raw()) - i128::from(self.claimable(now).raw());
        Asset::new(locked as i64)
    }

    /// Fail unless `staked` still covers the locked portion at `now`.
    pub fn check(&self, staked: i64, now: Timestamp) -> Result<(), StakingError> {
        let locked = self.locked(now);
        if locked.raw() > staked {
            return Err(StakingError::VestingViolation {
                account: self.account.clone(),
                staked: Asset::new(staked),
                locked,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(start: u64, duration: u64, total: i64) -> VestingSchedule {
        VestingSchedule {
            account: AccountName::new("b1").unwrap(),
            start: Timestamp::new(start),
            duration_secs: duration,
            total_allocation: Asset::new(total),
        }
    }

    #[test]
    fn claimable_grows_linearly() {
        let s = schedule(1_000, 100, 1_000);
        assert_eq!(s.claimable(Timestamp::new(500)), Asset::ZERO);
        assert_eq!(s.claimable(Timestamp::new(1_000)), Asset::ZERO);
        assert_eq!(s.claimable(Timestamp::new(1_025)), Asset::new(250));
        assert_eq!(s.claimable(Timestamp::new(1_100)), Asset::new(1_000));
        assert_eq!(s.claimable(Timestamp::new(9_999)), Asset::new(1_000));
        assert_eq!(s.locked(Timestamp::new(1_025)), Asset::new(750));
    }

    #[test]
    fn check_requires_stake_to_cover_the_locked_share() {
        let s = schedule(0, 100, 1_000);
        let now = Timestamp::new(40);
        assert!(s.check(600, now).is_ok());
        assert!(s.check(700, now).is_ok());
        let err = s.check(599, now).unwrap_err();
        assert!(matches!(err, StakingError::VestingViolation { locked, .. } if locked == Asset::new(600)));
    }

    #[test]
    fn fully_vested_allows_everything() {
        let s = schedule(0, 100, 1_000);
        assert!(s.check(0, Timestamp::new(100)).is_ok());
    }

    #[test]
    fn reference_allocation_is_fully_locked_at_start() {
        let b1 = VestingSchedule::reference_b1();
        assert_eq!(b1.locked(b1.start), b1.total_allocation);
        assert_eq!(b1.duration_secs, 314_496_000);
        let halfway = b1.start.saturating_add_secs(b1.duration_secs / 2);
        assert_eq!(b1.claimable(halfway), Asset::new(50_000_000 * Asset::UNIT));
    }
}
