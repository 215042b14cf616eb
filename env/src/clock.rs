use delband_types::Timestamp;

/// Source of the current time for the operation being applied.
///
/// On a ledger this is the timestamp of the block being applied, so every
/// node re-executing the operation observes the same value.
pub trait Clock {
    fn now(&self) -> Timestamp;
}
