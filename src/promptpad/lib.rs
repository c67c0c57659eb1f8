//! # Promptpad Architecture
//!
//! Promptpad is a **UI-agnostic prompt library**: a local store of reusable
//! prompt snippets, each classified under a two-level Group/Subgroup
//! hierarchy and persisted in a single delimited-text file. The CLI in
//! `main.rs` is just one client of the library.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the record store and the filter session             │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (codec, index, filter, store/)              │
//! │  - Codec: prompt-file text ⇄ records                        │
//! │  - ClassificationIndex + FilterEngine: derived views        │
//! │  - Abstract StorageBackend trait                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Reads: backend text → [`codec`] → [`store::prompt_store::PromptStore`]
//! snapshot → [`index::ClassificationIndex`] → [`filter`] → visible subset
//! handed to presentation.
//!
//! Writes: every mutation (create, update, delete, import, capture) goes
//! through the store, which re-encodes and rewrites the whole file, then the
//! index and filter views are re-derived. There is no partial persistence;
//! the quick-capture path in [`commands::capture`] deliberately re-reads the
//! file instead of sharing an open session's memory.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a TUI, an editor plugin, or any other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`codec`]: The delimited-text file format
//! - [`store`]: Storage abstraction, the file/memory backends, and the
//!   record store itself
//! - [`model`]: Core data types (`Record`, `RecordKey`)
//! - [`index`]: The derived Group → Subgroup → records hierarchy
//! - [`filter`]: The two-level filter engine and its selection rules
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod store;
