//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection or transaction and returns models from
//! [`crate::db::models`]:
//!
//! ```ignore
//! use menuboard::db::handlers::{MenuItems, Repository};
//! use menuboard::db::handlers::menu_items::MenuItemFilter;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let mut repo = MenuItems::new(&mut tx);
//!     let items = repo.list(&MenuItemFilter::all()).await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod menu_items;
pub mod repository;

pub use menu_items::MenuItems;
pub use repository::Repository;
