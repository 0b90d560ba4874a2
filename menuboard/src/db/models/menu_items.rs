//! Database models for menu items.

use crate::types::MenuItemId;
use serde::{Deserialize, Serialize};

/// Database representation of a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub label: String,
    pub value: i64,
}

/// Request to create a new menu item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreateDBRequest {
    pub label: String,
    pub value: i64,
}

/// Request to update an existing menu item. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdateDBRequest {
    pub label: Option<String>,
    pub value: Option<i64>,
}

/// Response from database after creating or updating a menu item
pub type MenuItemDBResponse = MenuItem;
