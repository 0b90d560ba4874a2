//! API request/response models for menu items.

use crate::db::models::menu_items::{MenuItemDBResponse, MenuItemUpdateDBRequest};
use crate::errors::Error;
use crate::types::{MAX_LABEL_LENGTH, MenuItemId, label_within_limit};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating a new menu item.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemCreate {
    /// Text shown on the menu (at most 255 characters, may be empty)
    #[schema(example = "Falafel", max_length = 255)]
    pub label: String,
    /// Price, a whole number
    #[schema(example = 12)]
    pub value: i64,
}

/// Request body for updating an existing menu item. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MenuItemUpdate {
    #[schema(example = "Falafel wrap", max_length = 255)]
    pub label: Option<String>,
    #[schema(example = 14)]
    pub value: Option<i64>,
}

/// A menu item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemResponse {
    /// Store-assigned identifier
    pub id: MenuItemId,
    pub label: String,
    pub value: i64,
}

impl From<MenuItemDBResponse> for MenuItemResponse {
    fn from(item: MenuItemDBResponse) -> Self {
        Self {
            id: item.id,
            label: item.label,
            value: item.value,
        }
    }
}

fn validate_label(label: &str) -> Result<(), Error> {
    if label_within_limit(label) {
        Ok(())
    } else {
        Err(Error::BadRequest {
            message: format!("label must be at most {MAX_LABEL_LENGTH} characters"),
        })
    }
}

impl MenuItemCreate {
    pub fn validate(&self) -> Result<(), Error> {
        validate_label(&self.label)
    }
}

impl MenuItemUpdate {
    pub fn validate(&self) -> Result<(), Error> {
        match &self.label {
            Some(label) => validate_label(label),
            None => Ok(()),
        }
    }
}

impl From<MenuItemUpdate> for MenuItemUpdateDBRequest {
    fn from(update: MenuItemUpdate) -> Self {
        Self {
            label: update.label,
            value: update.value,
        }
    }
}
