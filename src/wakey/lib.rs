//! # Wakey Architecture
//!
//! Wakey is a small markdown note service. Each entry is one markdown file on disk,
//! keyed by a case-insensitive title, and served as JSON or as a rendered HTML page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients: HTTP (web/) and CLI (main.rs)                     │
//! │  - Parse requests/arguments, shape JSON, HTML or stdout     │
//! │  - The ONLY places that know about status codes and stdout  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the store and the markdown renderer     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - EntryStore trait, owns title canonicalization            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Titles
//!
//! A title is stored under its lowercase form and always handed back in uppercase.
//! `write("Recipe", ..)` creates `recipe.md`; reading `RECIPE`, `recipe` or `Recipe`
//! all return an entry titled `RECIPE`. See [`model`].
//!
//! ## No Coordination
//!
//! Nothing serializes access to an entry. Concurrent writes to one title race at the
//! filesystem and the last to finish wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry`, listings, title canonicalization
//! - [`markdown`]: Markdown to HTML
//! - [`web`]: Axum router, handlers and page templates
//! - [`config`]: Configuration file, environment overrides
//! - [`init`]: Wiring config into a ready-to-use store and app state
//! - [`error`]: Error types

pub mod api;
pub mod config;
pub mod error;
pub mod init;
pub mod markdown;
pub mod model;
pub mod store;
pub mod web;
