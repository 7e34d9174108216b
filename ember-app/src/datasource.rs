//! Data source abstraction
//!
//! One capability interface over the two backings of every editable list:
//! the REST API and in-memory fixtures. The implementation is picked once
//! at startup; the screens and the collection store only ever see the
//! trait.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use ember_client::HttpClient;
use shared::client::{EntityPayload, ListPayload};
use shared::models::{CatalogItem, UserAccount, UserCreate};
use shared::{AppError, AppResult};

/// Entity with a stable identifier, usable in a collection store
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

impl Entity for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for UserAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Remote (or fixture) backing for one entity collection
#[async_trait]
pub trait DataSource<T: Entity>: Send + Sync {
    async fn list(&self) -> AppResult<Vec<T>>;
    /// Returns the authoritative entity; the server may reassign fields
    /// (including the id)
    async fn create(&self, item: T) -> AppResult<T>;
    async fn update(&self, item: T) -> AppResult<T>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

// =============================================================================
// HTTP-backed sources
// =============================================================================

/// Generic REST collection at `{path}` / `{path}/{id}` with the standard
/// `data` envelopes
pub struct HttpCollectionSource<T> {
    client: HttpClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> HttpCollectionSource<T> {
    pub fn new(client: HttpClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T> DataSource<T> for HttpCollectionSource<T>
where
    T: Entity + Serialize + DeserializeOwned,
{
    async fn list(&self) -> AppResult<Vec<T>> {
        let payload: ListPayload<T> = self.client.get(self.path).await?;
        Ok(payload.data)
    }

    async fn create(&self, item: T) -> AppResult<T> {
        let payload: EntityPayload<T> = self.client.post(self.path, &item).await?;
        Ok(payload.data)
    }

    async fn update(&self, item: T) -> AppResult<T> {
        let path = format!("{}/{}", self.path, item.id());
        let payload: EntityPayload<T> = self.client.put(&path, &item).await?;
        Ok(payload.data)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.client.delete(&format!("{}/{}", self.path, id)).await?;
        Ok(())
    }
}

/// User directory source speaking the exact `/users` wire shapes
/// (`POST {name,email,role}`, `PUT {active}`).
///
/// The one-time temp password returned on create is stashed for the
/// caller to take after the store reconciles.
pub struct UserDirectorySource {
    client: HttpClient,
    temp_password: Mutex<Option<String>>,
}

impl UserDirectorySource {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            temp_password: Mutex::new(None),
        }
    }

    /// Take the temp password from the most recent create, if any
    pub fn take_temp_password(&self) -> Option<String> {
        self.temp_password.lock().expect("temp password lock").take()
    }
}

#[async_trait]
impl DataSource<UserAccount> for UserDirectorySource {
    async fn list(&self) -> AppResult<Vec<UserAccount>> {
        Ok(self.client.list_users().await?)
    }

    async fn create(&self, item: UserAccount) -> AppResult<UserAccount> {
        let create = UserCreate {
            name: item.name.clone().unwrap_or_default(),
            email: item.email.clone(),
            role: item.role,
        };
        let (account, temp_password) = self.client.create_user(&create).await?;
        *self.temp_password.lock().expect("temp password lock") = temp_password;
        Ok(account)
    }

    async fn update(&self, item: UserAccount) -> AppResult<UserAccount> {
        // the directory's only mutable field over the wire is the active flag
        Ok(self
            .client
            .set_user_active(&item.id, item.is_active)
            .await?)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        Ok(self.client.delete_user(id).await?)
    }
}

// =============================================================================
// In-memory source
// =============================================================================

/// Fixture-backed source for the offline variant and tests.
///
/// `fail_next` arranges for the next call to fail once, which is how
/// tests drive the rollback path.
pub struct MemorySource<T: Entity> {
    rows: Mutex<Vec<T>>,
    fail_next: AtomicBool,
}

impl<T: Entity> MemorySource<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Mutex::new(rows),
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next data-source call fail with a remote error
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> AppResult<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(AppError::remote("Network request failed"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<T: Entity> DataSource<T> for MemorySource<T> {
    async fn list(&self) -> AppResult<Vec<T>> {
        self.check_failure()?;
        Ok(self.rows.lock().expect("rows lock").clone())
    }

    async fn create(&self, item: T) -> AppResult<T> {
        self.check_failure()?;
        let mut rows = self.rows.lock().expect("rows lock");
        rows.push(item.clone());
        Ok(item)
    }

    async fn update(&self, item: T) -> AppResult<T> {
        self.check_failure()?;
        let mut rows = self.rows.lock().expect("rows lock");
        let pos = rows
            .iter()
            .position(|row| row.id() == item.id())
            .ok_or_else(|| AppError::not_found("Entry"))?;
        rows[pos] = item.clone();
        Ok(item)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.check_failure()?;
        let mut rows = self.rows.lock().expect("rows lock");
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(AppError::not_found("Entry"));
        }
        Ok(())
    }
}
