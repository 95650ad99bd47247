// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::db::{KvStore, NOTIFICATIONS_KEY, load_document, remove_document, save_document};
use crate::models::{NewNotification, Notification};

/// Unread notifications flip to read once they have been presented this long.
pub const AUTO_READ_AFTER_SECS: i64 = 5;

/// Newest-first list of notifications, persisted after every change.
pub struct NotificationStore<'a> {
    kv: &'a dyn KvStore,
    items: Vec<Notification>,
}

impl<'a> NotificationStore<'a> {
    pub fn load(kv: &'a dyn KvStore) -> Self {
        let items: Vec<Notification> = load_document(kv, NOTIFICATIONS_KEY);
        NotificationStore { kv, items }
    }

    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn add(&mut self, notification: NewNotification) -> Notification {
        self.add_at(notification, Utc::now())
    }

    pub fn add_at(&mut self, notification: NewNotification, now: DateTime<Utc>) -> Notification {
        let stored = Notification {
            id: Uuid::new_v4().to_string(),
            title: notification.title,
            message: notification.message,
            severity: notification.severity,
            read: false,
            created_at: now,
        };
        self.items.insert(0, stored.clone());
        self.save();
        stored
    }

    /// Idempotent; unknown ids are ignored.
    pub fn mark_read(&mut self, id: &str) {
        for n in self.items.iter_mut().filter(|n| n.id == id) {
            n.read = true;
        }
        self.save();
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
        self.save();
    }

    pub fn clear_all(&mut self) {
        self.items.clear();
        self.save();
    }

    /// Drop the collection entirely, as a data wipe does.
    pub fn wipe(&mut self) {
        self.items.clear();
        remove_document(self.kv, NOTIFICATIONS_KEY);
    }

    /// Mark read every unread notification whose presentation delay has
    /// elapsed at `now`. Returns how many changed.
    pub fn settle(&mut self, now: DateTime<Utc>) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut() {
            if !n.read && now - n.created_at >= Duration::seconds(AUTO_READ_AFTER_SECS) {
                n.read = true;
                changed += 1;
            }
        }
        if changed > 0 {
            self.save();
        }
        changed
    }

    fn save(&self) {
        save_document(self.kv, NOTIFICATIONS_KEY, &self.items);
    }
}
