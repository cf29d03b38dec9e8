//! Per-resource data-access object with a cached last-fetched list.
//!
//! Updates and deletes mutate the cache first and then issue the request
//! (optimistic, last-write-wins). A failed request emits a notification
//! and leaves the cache as it is; the app continues on stale state.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::ClientError;
use crate::http::ApiClient;
use crate::notify::Notifier;
use crate::resource::ApiResource;

pub struct Dao<R: ApiResource> {
    client: Arc<ApiClient>,
    notifier: Notifier,
    cache: RwLock<Vec<R>>,
}

impl<R: ApiResource> Dao<R> {
    pub fn new(client: Arc<ApiClient>, notifier: Notifier) -> Self {
        Self {
            client,
            notifier,
            cache: RwLock::new(Vec::new()),
        }
    }

    /// Fetch the full list and replace the cache.
    pub async fn refresh(&self) -> Result<Vec<R>, ClientError> {
        match self.client.list::<R>().await {
            Ok(rows) => {
                *self.cache.write() = rows.clone();
                Ok(rows)
            }
            Err(e) => {
                self.notifier.error(format!("failed to load {}: {e}", R::PATH));
                Err(e)
            }
        }
    }

    /// Snapshot of the cached list. May be stale.
    pub fn cached(&self) -> Vec<R> {
        self.cache.read().clone()
    }

    /// Create a row. The id is server-assigned, so the cache is extended
    /// only after the server responds.
    pub async fn create(&self, payload: &R::Payload) -> Result<R, ClientError> {
        match self.client.create::<R>(payload).await {
            Ok(row) => {
                self.cache.write().insert(0, row.clone());
                Ok(row)
            }
            Err(e) => {
                self.notifier.error(format!("failed to create {}: {e}", R::PATH));
                Err(e)
            }
        }
    }

    /// Optimistic full replace: the cached row is rewritten before the
    /// PUT goes out. No rollback on failure.
    pub async fn update(&self, id: i64, payload: &R::Payload) -> Result<(), ClientError> {
        {
            let mut cache = self.cache.write();
            if let Some(row) = cache.iter_mut().find(|r| r.id() == id) {
                *row = R::apply(row, payload);
            }
        }

        match self.client.update::<R>(id, payload).await {
            Ok(Some(row)) => {
                let mut cache = self.cache.write();
                if let Some(slot) = cache.iter_mut().find(|r| r.id() == id) {
                    *slot = row;
                }
                Ok(())
            }
            // Missing server-side: keep the optimistic row, nothing to reconcile
            Ok(None) => Ok(()),
            Err(e) => {
                self.notifier.error(format!("failed to save {}: {e}", R::PATH));
                Err(e)
            }
        }
    }

    /// Optimistic delete: the row leaves the cache before the request.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        self.cache.write().retain(|r| r.id() != id);

        match self.client.delete::<R>(id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                self.notifier.error(format!("failed to delete {}: {e}", R::PATH));
                Err(e)
            }
        }
    }
}
