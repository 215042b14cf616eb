//! Ledger account names.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A ledger account name, e.g. `alice` or `eosio.stake`.
///
/// Names are 1 to 12 characters drawn from `a-z`, `1-5` and `.`, and never
/// end with a dot. Ordering is plain lexicographic so that tables keyed by
/// account iterate deterministically.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountName(String);

impl AccountName {
    /// Maximum length of an account name.
    pub const MAX_LEN: usize = 12;

    /// Create an account name, validating the character set and length.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        if s.is_empty() || s.len() > Self::MAX_LEN {
            return Err(TypesError::InvalidAccountName(s));
        }
        let valid_chars = s
            .chars()
            .all(|c| c == '.' || ('a'..='z').contains(&c) || ('1'..='5').contains(&c));
        if !valid_chars || s.ends_with('.') {
            return Err(TypesError::InvalidAccountName(s));
        }
        Ok(Self(s))
    }

    /// Build a name from a literal known to be valid.
    ///
    /// # Panics
    /// If `name` is not a valid account name.
    pub fn from_static(name: &'static str) -> Self {
        Self::new(name).expect("static account name literal is valid")
    }

    /// Return the raw name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountName {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for AccountName {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AccountName> for String {
    fn from(name: AccountName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_system_style_names() {
        assert!(AccountName::new("eosio.stake").is_ok());
        assert!(AccountName::new("alice").is_ok());
        assert!(AccountName::new("b1").is_ok());
        assert!(AccountName::new("abcde1234512").is_ok());
    }

    #[test]
    fn rejects_malformed_names() {
        assert!(AccountName::new("").is_err());
        assert!(AccountName::new("Alice").is_err());
        assert!(AccountName::new("bob6").is_err());
        assert!(AccountName::new("trailing.").is_err());
        assert!(AccountName::new("thirteenchars").is_err());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<AccountName, _> = serde_json::from_str("\"carol\"");
        assert_eq!(ok.unwrap().as_str(), "carol");
        let bad: Result<AccountName, _> = serde_json::from_str("\"NOPE\"");
        assert!(bad.is_err());
    }

    #[test]
    #[should_panic]
    fn from_static_panics_on_bad_literal() {
        let _ = AccountName::from_static("Bad");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = AccountName::new("alice").unwrap();
        let b = AccountName::new("bob").unwrap();
        assert!(a < b);
    }
}
