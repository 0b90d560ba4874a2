//! Authentication for the administrative API.
//!
//! The public menu page needs no credentials. Everything under `/admin/api/v1` is guarded by a
//! single static API key from `admin.api_key`, passed as `Authorization: Bearer <key>`. Handlers
//! opt in by taking an [`AdminAccess`] argument.

mod admin;

pub use admin::AdminAccess;
