// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use futures::future::LocalBoxFuture;
use smol::channel::Receiver;

use super::StoreError;

type Fetch<T> = Box<dyn Fn() -> LocalBoxFuture<'static, Result<T, StoreError>>>;

/// A query that delivers its current result and then a fresh one after every
/// change to the underlying table.
pub struct LiveQuery<T> {
    invalidated: Receiver<()>,
    fetch: Fetch<T>,
    delivered: bool,
}

impl<T> LiveQuery<T> {
    /// `invalidated` must be subscribed before the first fetch runs, otherwise a
    /// write landing in between would go unnoticed.
    pub fn new(
        invalidated: Receiver<()>,
        fetch: impl Fn() -> LocalBoxFuture<'static, Result<T, StoreError>> + 'static,
    ) -> Self {
        Self { invalidated, fetch: Box::new(fetch), delivered: false }
    }

    /// Waits for the next result. Returns `None` once the store has shut down.
    ///
    /// A failed fetch is logged and skipped; the query then waits for the next change.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            if self.delivered && self.invalidated.recv().await.is_err() {
                return None;
            }
            self.delivered = true;

            match (self.fetch)().await {
                Ok(value) => return Some(value),
                Err(StoreError::Closed) => return None,
                Err(e) => log::warn!("Failed to refresh live query: {}", e),
            }
        }
    }
}
