//! # Verso Architecture
//!
//! Verso is a **terminal-agnostic poem catalog library**. The binary is a
//! thin client: everything it shows comes out of this library as plain data,
//! and nothing in here ever touches a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, runs the browse loop   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pure function per CLI verb                           │
//! │  - Takes loaded data, returns structured CmdResult          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog Pipeline (loader, normalize, catalog, filter)      │
//! │  - Manifest fetch, per-poem fetch, lenient decode           │
//! │  - Sorted read-only catalog with filtering on top           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract ContentSource trait                             │
//! │  - DirSource / HttpSource (production), MemorySource (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Partial Failure Is Normal
//!
//! Collections live as static files on disk or behind a dumb file host.
//! Files go missing, metadata rots. Only a missing manifest is fatal;
//! every per-poem problem downgrades to a skip with a log line, and a
//! missing image downgrades to a placeholder. The pipeline always hands
//! the CLI the best catalog it could assemble.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the command layer inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Even the interactive state machine ([`browse::BrowseState`]) is a pure
//! key-to-state-change function; the binary owns the event loop around it.
//!
//! ## Testing Strategy
//!
//! 1. **Pipeline** (`normalize`, `catalog`, `filter`, `loader`): thorough
//!    unit tests of decode fallbacks, ordering, and partial failure. This
//!    is where the lion's share of testing lives.
//! 2. **Commands** (`commands/*.rs`): unit tests over in-memory catalogs
//!    and the fixture source.
//! 3. **CLI** (`tests/`): end-to-end runs of the binary against temp
//!    collection directories.
//!
//! ## Module Overview
//!
//! - [`source`]: Where collections come from (dir, http, memory)
//! - [`loader`]: Concurrent manifest and poem loading
//! - [`normalize`]: Lenient metadata decode and field fallbacks
//! - [`catalog`]: The sorted read-only catalog and derived tags
//! - [`filter`]: Query plus tag filtering
//! - [`commands`]: One module per CLI verb
//! - [`browse`]: Pure state machine for the interactive session
//! - [`model`]: Core data type (`Poem`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod browse;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod source;
