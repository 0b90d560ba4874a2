//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//!
//! ```text
//! ┌─────────────┐
//! │ MenuStore   │  (crate::store - what request handlers hold)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries over one connection)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Migrations
//!
//! Migrations live in the crate's `migrations/` directory and are embedded at compile time. They
//! run automatically when the application connects to an external database:
//!
//! ```ignore
//! menuboard::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
