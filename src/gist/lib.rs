//! # gist
//!
//! Uploads text to GitHub Gist from the command line. Content comes from one
//! of three sources: piped stdin, a list of files (globs expanded by the
//! shell), or the system clipboard. It is sent as a single gist and the
//! resulting URL is returned.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages and the URL            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - resolve mode → assemble files → encode → upload          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input-mode resolution, file assembly, payload encoding   │
//! │  - Returns `CmdResult` with files, URL and messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Input Layer (input/)        │  │  HTTP client (client.rs) │
//! │  - InputSource trait         │  │  - blocking reqwest POST │
//! │  - SystemInput, MemoryInput  │  │  - status classification │
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for creating a gist
//! - [`commands`]: Mode resolution, assembly, encoding, upload
//! - [`input`]: Stdin/file/clipboard access behind a trait
//! - [`client`]: The gist endpoint client
//! - [`config`]: Settings file and per-run options
//! - [`model`]: `NamedContent`, `OverrideNames`, `Visibility`
//! - [`error`]: Error types

pub mod api;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
