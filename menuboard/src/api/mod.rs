//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Request/response data structures for the admin API
//!
//! # Routes
//!
//! - `GET /menu`: the HTML listing page (public)
//! - `/admin/api/v1/menu-items`: JSON management of menu items (admin API key)
//!
//! The admin API is documented with `utoipa`; the OpenAPI document is served at
//! `/admin/api/v1/openapi.json` and browsable at `/admin/docs`.

pub mod handlers;
pub mod models;
