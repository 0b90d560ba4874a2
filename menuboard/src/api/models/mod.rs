//! Request/response data structures for the admin API.

pub mod menu_items;
