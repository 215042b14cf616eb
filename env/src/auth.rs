use crate::EnvError;
use delband_types::AccountName;

pub trait Authorizer {
    /// Fail unless the current operation carries the authority of `account`.
    fn require_auth(&self, account: &AccountName) -> Result<(), EnvError>;
}
