//! Axum route handlers.
//!
//! - [`menu`]: the public listing page
//! - [`menu_items`]: admin CRUD for menu items

pub mod menu;
pub mod menu_items;
