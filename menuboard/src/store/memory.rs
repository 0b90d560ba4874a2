use super::MenuStore;
use crate::{
    db::{
        errors::{DbError, Result},
        models::menu_items::{MenuItem, MenuItemUpdateDBRequest},
    },
    types::{MAX_LABEL_LENGTH, MenuItemId, label_within_limit},
};
use tokio::sync::RwLock;
use tracing::instrument;

/// [`MenuStore`] kept in process memory. Contents are lost when the process exits.
///
/// Enforces the same label length limit as the `menu_items` table so both stores reject the
/// same writes.
#[derive(Debug, Default)]
pub struct InMemoryMenuStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    // Kept sorted by id since ids only grow
    items: Vec<MenuItem>,
    last_id: MenuItemId,
}

impl Inner {
    fn push(&mut self, label: String, value: i64) -> MenuItem {
        self.last_id += 1;
        let item = MenuItem {
            id: self.last_id,
            label,
            value,
        };
        self.items.push(item.clone());
        item
    }
}

impl InMemoryMenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store that already holds the given `(label, value)` pairs, in order.
    pub fn with_items<I, L>(items: I) -> Self
    where
        I: IntoIterator<Item = (L, i64)>,
        L: Into<String>,
    {
        let mut inner = Inner::default();
        for (label, value) in items {
            inner.push(label.into(), value);
        }
        Self { inner: RwLock::new(inner) }
    }
}

fn check_label(label: &str) -> Result<()> {
    if label_within_limit(label) {
        Ok(())
    } else {
        Err(DbError::CheckViolation {
            constraint: None,
            table: Some("menu_items".to_string()),
            message: format!("label exceeds {MAX_LABEL_LENGTH} characters"),
        })
    }
}

#[async_trait::async_trait]
impl MenuStore for InMemoryMenuStore {
    #[instrument(skip(self), err)]
    async fn insert(&self, label: &str, value: i64) -> Result<MenuItem> {
        check_label(label)?;
        Ok(self.inner.write().await.push(label.to_string(), value))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<MenuItem>> {
        Ok(self.inner.read().await.items.clone())
    }

    #[instrument(skip(self))]
    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>> {
        Ok(self.inner.read().await.items.iter().find(|item| item.id == id).cloned())
    }

    #[instrument(skip(self, request), err)]
    async fn update(&self, id: MenuItemId, request: &MenuItemUpdateDBRequest) -> Result<Option<MenuItem>> {
        if let Some(label) = &request.label {
            check_label(label)?;
        }

        let mut inner = self.inner.write().await;
        let Some(item) = inner.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        if let Some(label) = &request.label {
            item.label = label.clone();
        }
        if let Some(value) = request.value {
            item.value = value;
        }
        Ok(Some(item.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: MenuItemId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|item| item.id != id);
        Ok(inner.items.len() < before)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64> {
        Ok(self.inner.read().await.items.len() as i64)
    }
}
