use super::MenuStore;
use crate::{
    db::{
        errors::{DbError, Result},
        handlers::{MenuItems, Repository, menu_items::MenuItemFilter},
        models::menu_items::{MenuItem, MenuItemCreateDBRequest, MenuItemUpdateDBRequest},
    },
    types::MenuItemId,
};
use sqlx::PgPool;
use tracing::instrument;

/// [`MenuStore`] backed by the `menu_items` table.
///
/// Each call checks a connection out of the pool for the duration of one repository operation.
#[derive(Debug, Clone)]
pub struct PgMenuStore {
    pool: PgPool,
}

impl PgMenuStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl MenuStore for PgMenuStore {
    #[instrument(skip(self), err)]
    async fn insert(&self, label: &str, value: i64) -> Result<MenuItem> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        repo.create(&MenuItemCreateDBRequest {
            label: label.to_string(),
            value,
        })
        .await
    }

    #[instrument(skip(self), err)]
    async fn list_all(&self) -> Result<Vec<MenuItem>> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        repo.list(&MenuItemFilter::all()).await
    }

    #[instrument(skip(self), err)]
    async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        repo.get_by_id(id).await
    }

    #[instrument(skip(self, request), err)]
    async fn update(&self, id: MenuItemId, request: &MenuItemUpdateDBRequest) -> Result<Option<MenuItem>> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        match repo.update(id, request).await {
            Ok(item) => Ok(Some(item)),
            Err(DbError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, id: MenuItemId) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        repo.delete(id).await
    }

    #[instrument(skip(self), err)]
    async fn count(&self) -> Result<i64> {
        let mut conn = self.pool.acquire().await?;
        let mut repo = MenuItems::new(&mut conn);
        repo.count().await
    }
}
