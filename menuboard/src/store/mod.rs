//! The record store behind the menu page.
//!
//! Handlers never talk to a database driver directly. They hold an `Arc<dyn MenuStore>` in
//! [`crate::AppState`], which is either a [`PgMenuStore`] over a connection pool or an
//! [`InMemoryMenuStore`] for development and tests.
//!
//! Both implementations return items in insertion order (ascending id), and every write is
//! visible to the next read.

mod memory;
mod postgres;

pub use memory::InMemoryMenuStore;
pub use postgres::PgMenuStore;

use crate::{
    db::{
        errors::Result,
        models::menu_items::{MenuItem, MenuItemUpdateDBRequest},
    },
    types::MenuItemId,
};

#[async_trait::async_trait]
pub trait MenuStore: Send + Sync {
    /// Insert a new item. Used by the administrative paths only.
    async fn insert(&self, label: &str, value: i64) -> Result<MenuItem>;

    /// Every item, in insertion order.
    async fn list_all(&self) -> Result<Vec<MenuItem>>;

    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>>;

    /// Apply a partial update. Returns `None` if the item does not exist.
    async fn update(&self, id: MenuItemId, request: &MenuItemUpdateDBRequest) -> Result<Option<MenuItem>>;

    /// Returns whether the item existed.
    async fn delete(&self, id: MenuItemId) -> Result<bool>;

    async fn count(&self) -> Result<i64>;
}
