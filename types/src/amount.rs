//! Asset quantities of the core staking token.
//!
//! Quantities are signed fixed-point integers (i64) with four decimal places,
//! so a delta can carry its direction. Stored balances must never be negative;
//! the staking core enforces that, not this type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// Symbol of the core token.
pub const CORE_SYMBOL: &str = "SYS";

/// Number of decimal places in an asset quantity.
pub const PRECISION: u32 = 4;

/// A signed quantity of the core token, in raw units (1 SYS = 10_000 raw).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Asset(i64);

impl Asset {
    pub const ZERO: Self = Self(0);

    /// Raw units per whole token.
    pub const UNIT: i64 = 10_000;

    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_neg(self) -> Option<Self> {
        self.0.checked_neg().map(Self)
    }
}

impl Neg for Asset {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let unit = Self::UNIT as u64;
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            abs / unit,
            abs % unit,
            CORE_SYMBOL,
            width = PRECISION as usize
        )
    }
}
