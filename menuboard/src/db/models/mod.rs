//! Database record structures matching table schemas.

pub mod menu_items;
