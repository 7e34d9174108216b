//! Optimistic collection store
//!
//! Owns one screen's entity list and runs the CRUD state-merge protocol:
//! apply the mutation locally first, call the data source, then either
//! swap in the authoritative entity (preserving list position) or roll
//! the whole list back by re-fetching it.

use std::sync::Arc;

use shared::{AppError, AppResult};

use crate::datasource::{DataSource, Entity};

/// Screen-owned entity list with optimistic mutations
pub struct CollectionStore<T: Entity> {
    source: Arc<dyn DataSource<T>>,
    items: Vec<T>,
    /// Row currently mid-mutation; its controls are disabled in the UI
    in_flight: Option<String>,
}

impl<T: Entity> CollectionStore<T> {
    pub fn new(source: Arc<dyn DataSource<T>>) -> Self {
        Self {
            source,
            items: Vec::new(),
            in_flight: None,
        }
    }

    /// Current list, in source order plus any optimistic edits
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether this row's controls should be disabled
    pub fn is_busy(&self, id: &str) -> bool {
        self.in_flight.as_deref() == Some(id)
    }

    /// Load the authoritative list.
    ///
    /// A failed load leaves no partial list behind.
    pub async fn refresh(&mut self) -> AppResult<()> {
        match self.source.list().await {
            Ok(rows) => {
                self.items = rows;
                Ok(())
            }
            Err(err) => {
                self.items.clear();
                Err(err)
            }
        }
    }

    fn begin(&mut self, id: &str) -> AppResult<()> {
        if self.is_busy(id) {
            return Err(AppError::Busy);
        }
        self.in_flight = Some(id.to_string());
        Ok(())
    }

    fn finish(&mut self) {
        self.in_flight = None;
    }

    /// Discard optimistic state by re-reading the authoritative list.
    ///
    /// When the refetch itself fails the list empties, same as a failed
    /// load.
    async fn rollback(&mut self) {
        match self.source.list().await {
            Ok(rows) => self.items = rows,
            Err(err) => {
                tracing::warn!(error = %err, "rollback refetch failed, clearing list");
                self.items.clear();
            }
        }
    }

    /// Create: optimistic append, then reconcile with the authoritative
    /// entity (the source may have reassigned the id)
    pub async fn create(&mut self, item: T) -> AppResult<T> {
        let local_id = item.id().to_string();
        self.begin(&local_id)?;
        self.items.push(item.clone());

        let result = self.source.create(item).await;
        self.finish();

        match result {
            Ok(authoritative) => {
                if let Some(pos) = self.items.iter().position(|row| row.id() == local_id) {
                    self.items[pos] = authoritative.clone();
                }
                Ok(authoritative)
            }
            Err(err) => {
                tracing::warn!(id = %local_id, error = %err, "create failed, rolling back");
                self.rollback().await;
                Err(err)
            }
        }
    }

    /// Update: optimistic in-place replace, then reconcile field-for-field
    pub async fn update(&mut self, item: T) -> AppResult<T> {
        let id = item.id().to_string();
        self.begin(&id)?;

        let Some(pos) = self.items.iter().position(|row| row.id() == id) else {
            self.finish();
            return Err(AppError::not_found("Entry"));
        };
        self.items[pos] = item.clone();

        let result = self.source.update(item).await;
        self.finish();

        match result {
            Ok(authoritative) => {
                if let Some(pos) = self.items.iter().position(|row| row.id() == id) {
                    self.items[pos] = authoritative.clone();
                }
                Ok(authoritative)
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "update failed, rolling back");
                self.rollback().await;
                Err(err)
            }
        }
    }

    /// Delete: optimistic removal, then confirm or roll back
    pub async fn delete(&mut self, id: &str) -> AppResult<()> {
        self.begin(id)?;

        let before = self.items.len();
        self.items.retain(|row| row.id() != id);
        if self.items.len() == before {
            self.finish();
            return Err(AppError::not_found("Entry"));
        }

        let result = self.source.delete(id).await;
        self.finish();

        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "delete failed, rolling back");
                self.rollback().await;
                Err(err)
            }
        }
    }
}
