//! Ember App - screen-facing core of the ops dashboard
//!
//! Pure aggregation and filtering engines (operations, catalog, user
//! directory), the optimistic-mutation collection store, the injected
//! session store and the dashboard overview derivation. Everything here is
//! synchronous and reentrant except the data-source boundary.

pub mod authz;
pub mod catalog;
pub mod datasource;
pub mod directory;
pub mod fixtures;
pub mod notes;
pub mod ops;
pub mod overview;
pub mod profile;
pub mod session;
pub mod store;

pub use datasource::{DataSource, Entity, HttpCollectionSource, MemorySource, UserDirectorySource};
pub use session::SessionStore;
pub use store::CollectionStore;
