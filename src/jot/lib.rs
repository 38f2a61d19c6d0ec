//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note-taking library** with a CLI client. The
//! original shape of the application is a single screen over a single
//! collection of notes, and the library keeps that shape: one canonical
//! in-memory collection, mirrored to durable storage after every
//! mutation.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)
//!   — argument parsing, rendering, terminal I/O, exit codes
//! API (api.rs)
//!   — thin facade; normalizes display positions to note ids
//! Commands (commands/*.rs)
//!   — business logic per operation; no I/O assumptions
//! Store (store/)
//!   — KvStore trait over durable key-value storage;
//!     NoteStore owns the collection and the mirror writes
//! ```
//!
//! ## The persistence model
//!
//! The in-memory collection is the source of truth for the session. The
//! durable store holds one key, a full JSON snapshot of the collection,
//! rewritten after every add/update/delete. Mirror writes are
//! best-effort: a failure is reported on a side channel (a warning in
//! the command result) and never rolls back the in-memory change. See
//! [`store::notes`] for the exact divergence rules.
//!
//! ## Key principle: no I/O assumptions in core
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or the process
//! exit code. The same core could serve another UI unchanged.
//!
//! ## Module overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: storage trait, file/memory backends, the note store
//! - [`model`]: `Note`, drafts, patches, the color palette
//! - [`index`]: display positions (1-based) over the collection
//! - [`config`]: configuration management
//! - [`editor`]: external editor integration (the add/edit form)
//! - [`clipboard`]: cross-platform clipboard support (sharing)
//! - [`error`]: error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
