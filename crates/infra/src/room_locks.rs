//! Per-room critical sections.
//!
//! Booking creation is a check-then-write sequence (scan for conflicts,
//! then insert). Without a guard, two concurrent requests for the same room
//! and overlapping dates can both pass the scan and both insert. The chosen
//! closure for that race is a keyed mutex: all writers for one room
//! serialize, writers for different rooms do not contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use innkeep_core::RoomId;

/// Registry of one mutex per room, created lazily.
///
/// Locks are never removed; the registry grows with the room catalog, which
/// is bounded and small.
#[derive(Debug, Default)]
pub struct RoomLockRegistry {
    locks: Mutex<HashMap<RoomId, Arc<Mutex<()>>>>,
}

impl RoomLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex guarding writes for `room_id`.
    ///
    /// A poisoned registry lock only means another thread panicked while
    /// fetching a room lock; the map itself is still sound, so recover.
    pub fn for_room(&self, room_id: RoomId) -> Arc<Mutex<()>> {
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.entry(room_id).or_default().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_room_yields_the_same_lock() {
        let registry = RoomLockRegistry::new();
        let room = RoomId::new();

        let a = registry.for_room(room);
        let b = registry.for_room(room);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_rooms_do_not_share_a_lock() {
        let registry = RoomLockRegistry::new();
        let a = registry.for_room(RoomId::new());
        let b = registry.for_room(RoomId::new());
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
