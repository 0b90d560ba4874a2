//! Common type definitions.
//!
//! Menu item ids are assigned by the store on insert and increase monotonically, so ordering by
//! id is the same as ordering by insertion time.

/// Identifier of a [`crate::db::models::menu_items::MenuItem`].
pub type MenuItemId = i64;

/// Longest label accepted on any write path, in characters. Matches the `VARCHAR(255)` column.
pub const MAX_LABEL_LENGTH: usize = 255;

/// Whether a label fits in the `menu_items.label` column.
pub fn label_within_limit(label: &str) -> bool {
    label.chars().count() <= MAX_LABEL_LENGTH
}
