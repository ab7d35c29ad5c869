// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-contact tracking for the unified-pointer path.

use kurbo::Point;
use smallvec::SmallVec;

use crate::event::PointerType;

/// Inline capacity for tracked contacts.
///
/// Two fingers cover every recognized gesture; four avoids spilling to the
/// heap even when a palm adds stray contacts.
const INLINE_CONTACTS: usize = 4;

/// One active contact tracked by the normalizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Stable identity of the contact across its lifetime.
    pub id: u64,
    /// Last reported position, viewport-absolute.
    pub position: Point,
}

/// The ordered set of active contacts plus the session's device-class lock.
///
/// Contacts keep their arrival order; the first two determine the canonical
/// target point and distance. The lock records the class of the first contact
/// and holds until the set empties again, so a competing device class cannot
/// join mid-session.
///
/// Invariants: ids are unique, and the lock is `Some` exactly while the set
/// is non-empty.
#[derive(Clone, Debug, Default)]
pub struct ContactSet {
    contacts: SmallVec<[Contact; INLINE_CONTACTS]>,
    locked: Option<PointerType>,
}

impl ContactSet {
    /// Creates an empty, unlocked set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of active contacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns `true` if no contacts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns the device class locked by the current session, if any.
    #[must_use]
    pub fn locked(&self) -> Option<PointerType> {
        self.locked
    }

    /// Returns `true` if a contact with this id is being tracked.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }

    /// Returns the active contacts in arrival order.
    #[must_use]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Inserts or repositions a contact and locks the set to `class`.
    ///
    /// A known id keeps its place in the arrival order; an unknown id is
    /// appended. Callers reject competing device classes before calling;
    /// the class of the first contact becomes the session lock.
    pub fn upsert(&mut self, id: u64, position: Point, class: PointerType) {
        debug_assert!(
            self.locked.is_none() || self.locked == Some(class),
            "upsert must not change the class lock mid-session"
        );

        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == id) {
            existing.position = position;
        } else {
            self.contacts.push(Contact { id, position });
        }
        self.locked = Some(class);
    }

    /// Removes the contact with this id, if tracked.
    ///
    /// Remaining contacts keep their order. Removing the last contact clears
    /// the class lock. Returns the removed contact, whose position is the
    /// coordinate a closing event reports.
    pub fn remove(&mut self, id: u64) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.id == id)?;
        let removed = self.contacts.remove(idx);
        if self.contacts.is_empty() {
            self.locked = None;
        }
        Some(removed)
    }

    /// Removes all contacts and clears the class lock.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.locked = None;
    }
}
