// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use smol::channel::{Receiver, Sender, TrySendError};

/// Broadcasts "the task table changed" to every live query of one database.
///
/// Each subscriber owns a channel with room for a single pending notification,
/// so a burst of writes wakes a query once and its next fetch sees all of them.
#[derive(Clone, Default)]
pub struct InvalidationTracker {
    subscribers: Arc<Mutex<Vec<Sender<()>>>>,
}

impl InvalidationTracker {
    pub fn subscribe(&self) -> Receiver<()> {
        let (sender, receiver) = smol::channel::bounded(1);
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).push(sender);
        receiver
    }

    pub fn notify(&self) {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).retain(|sender| {
            match sender.try_send(()) {
                Ok(()) | Err(TrySendError::Full(())) => true,
                Err(TrySendError::Closed(())) => false,
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
