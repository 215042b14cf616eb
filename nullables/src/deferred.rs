//! Nullable deferred queue: one slot per sender id, fired on demand.

use delband_env::{DeferredTask, EnvError};
use delband_types::{AccountName, Timestamp};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A pending deferred task and the time it becomes executable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask {
    pub task: DeferredTask,
    pub due: Timestamp,
}

/// A delayed-execution queue keyed by sender id.
///
/// Nothing fires by itself: tests call [`NullDeferredQueue::take_due`] and
/// execute the returned tasks, which is what a block producer does when the
/// delay of a deferred transaction has passed.
pub struct NullDeferredQueue {
    slots: Mutex<BTreeMap<AccountName, ScheduledTask>>,
}

impl NullDeferredQueue {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn schedule(
        &self,
        task: DeferredTask,
        now: Timestamp,
        replace_existing: bool,
    ) -> Result<(), EnvError> {
        let mut slots = self.slots.lock().unwrap();
        if !replace_existing && slots.contains_key(&task.sender_id) {
            return Err(EnvError::DeferredSlotOccupied(task.sender_id));
        }
        let due = now.saturating_add_secs(task.delay_secs);
        slots.insert(task.sender_id.clone(), ScheduledTask { task, due });
        Ok(())
    }

    pub fn cancel(&self, sender_id: &AccountName) -> bool {
        self.slots.lock().unwrap().remove(sender_id).is_some()
    }

    pub fn pending(&self, sender_id: &AccountName) -> Option<ScheduledTask> {
        self.slots.lock().unwrap().get(sender_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&self, now: Timestamp) -> Vec<DeferredTask> {
        let mut slots = self.slots.lock().unwrap();
        let due_keys: Vec<AccountName> = slots
            .iter()
            .filter(|(_, s)| s.due <= now)
            .map(|(k, _)| k.clone())
            .collect();
        let mut due: Vec<ScheduledTask> = due_keys
            .iter()
            .filter_map(|k| slots.remove(k))
            .collect();
        due.sort_by(|a, b| {
            a.due
                .cmp(&b.due)
                .then_with(|| a.task.sender_id.cmp(&b.task.sender_id))
        });
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn snapshot(&self) -> BTreeMap<AccountName, ScheduledTask> {
        self.slots.lock().unwrap().clone()
    }

    pub fn restore(&self, snapshot: BTreeMap<AccountName, ScheduledTask>) {
        *self.slots.lock().unwrap() = snapshot;
    }
}

impl Default for NullDeferredQueue {
    fn default() -> Self {
        Self::new()
    }
}
