//! Observer registry for state-change notifications.

use crate::types::GameState;
use std::fmt;

/// Callback invoked with a snapshot after every committed state change.
pub type Callback = Box<dyn Fn(&GameState) + Send + Sync>;

/// Registration token handed out by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("subscriber-{_0}")]
pub struct SubscriptionId(u64);

/// Subscribers in registration order.
///
/// Ids are never reused, so removing an id twice is a harmless no-op.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl SubscriberRegistry {
    pub(crate) fn register(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    /// Returns false if the id was not registered.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&self, state: &GameState) {
        for (_, callback) in &self.entries {
            callback(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("next_id", &self.next_id)
            .field(
                "ids",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}
