//! Database repository for menu items.

use crate::{
    db::{
        errors::Result,
        handlers::repository::Repository,
        models::menu_items::{MenuItem, MenuItemCreateDBRequest, MenuItemDBResponse, MenuItemUpdateDBRequest},
    },
    types::MenuItemId,
};
use sqlx::PgConnection;
use tracing::instrument;

/// Filter for listing menu items. Results are always in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MenuItemFilter {
    pub skip: i64,
    /// `None` returns every remaining row
    pub limit: Option<i64>,
}

impl MenuItemFilter {
    /// Every item, unpaginated
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit: Some(limit) }
    }
}

pub struct MenuItems<'c> {
    db: &'c mut PgConnection,
}

impl<'c> MenuItems<'c> {
    /// Create a new MenuItems repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for MenuItems<'c> {
    type CreateRequest = MenuItemCreateDBRequest;
    type UpdateRequest = MenuItemUpdateDBRequest;
    type Response = MenuItemDBResponse;
    type Id = MenuItemId;
    type Filter = MenuItemFilter;

    #[instrument(skip(self, request), fields(label = %request.label, value = request.value), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            INSERT INTO menu_items (label, value)
            VALUES ($1, $2)
            RETURNING id, label, value
            "#,
        )
        .bind(&request.label)
        .bind(request.value)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(self), err)]
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>> {
        let item = sqlx::query_as::<_, MenuItem>("SELECT id, label, value FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(item)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>> {
        // LIMIT NULL means no limit in postgres
        let items = sqlx::query_as::<_, MenuItem>(
            r#"
            SELECT id, label, value
            FROM menu_items
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(filter.skip.max(0))
        .bind(filter.limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(items)
    }

    #[instrument(skip(self), err)]
    async fn count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&mut *self.db)
            .await?;

        Ok(count)
    }

    #[instrument(skip(self), err)]
    async fn delete(&mut self, id: Self::Id) -> Result<bool> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, request), err)]
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response> {
        let item = sqlx::query_as::<_, MenuItem>(
            r#"
            UPDATE menu_items
            SET label = COALESCE($2, label),
                value = COALESCE($3, value)
            WHERE id = $1
            RETURNING id, label, value
            "#,
        )
        .bind(id)
        .bind(request.label.as_deref())
        .bind(request.value)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(item)
    }
}

#[cfg(all(test, feature = "pg-tests"))]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use sqlx::PgPool;

    fn create_request(label: &str, value: i64) -> MenuItemCreateDBRequest {
        MenuItemCreateDBRequest {
            label: label.to_string(),
            value,
        }
    }

    #[sqlx::test]
    async fn test_create_assigns_increasing_ids(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = MenuItems::new(&mut conn);

        let falafel = repo.create(&create_request("Falafel", 12)).await.unwrap();
        let shawarma = repo.create(&create_request("Shawarma", 15)).await.unwrap();

        assert_eq!(falafel.label, "Falafel");
        assert_eq!(falafel.value, 12);
        assert!(shawarma.id > falafel.id);
    }

    #[sqlx::test]
    async fn test_list_returns_insertion_order(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = MenuItems::new(&mut conn);

        for (label, value) in [("Zaatar", 3), ("Baklava", 10), ("Hummus", 7)] {
            repo.create(&create_request(label, value)).await.unwrap();
        }

        let labels: Vec<String> = repo
            .list(&MenuItemFilter::all())
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["Zaatar", "Baklava", "Hummus"]);

        let page = repo.list(&MenuItemFilter::new(1, 1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].label, "Baklava");

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[sqlx::test]
    async fn test_update_and_delete(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = MenuItems::new(&mut conn);

        let item = repo.create(&create_request("Falafel", 12)).await.unwrap();

        let updated = repo
            .update(
                item.id,
                &MenuItemUpdateDBRequest {
                    label: None,
                    value: Some(14),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.label, "Falafel");
        assert_eq!(updated.value, 14);

        assert!(repo.delete(item.id).await.unwrap());
        assert!(!repo.delete(item.id).await.unwrap());
        assert!(repo.get_by_id(item.id).await.unwrap().is_none());

        let missing = repo.update(item.id, &MenuItemUpdateDBRequest::default()).await;
        assert!(matches!(missing, Err(DbError::NotFound)));
    }

    #[sqlx::test]
    async fn test_overlong_label_is_a_check_violation(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = MenuItems::new(&mut conn);

        let result = repo.create(&create_request(&"x".repeat(256), 1)).await;
        assert!(matches!(result, Err(DbError::CheckViolation { .. })));
    }
}
