//! # notes Architecture
//!
//! notes keeps plain-text notes in a directory tree:
//!
//! ```text
//! <home>/
//! ├── .git/            # optional, created on first `new` when git is available
//! ├── work/            # a category is a directory
//! │   └── todo         # a note is a file
//! └── ideas/
//!     └── app.md
//! ```
//!
//! This crate is the creation pipeline: resolving where notes live and which
//! external tools are available, creating the note file, and acquiring its
//! first content.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, installs logging, prints results       │
//! │  - Owns exit codes and the real stdin/stdout/stderr         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - `new`, `config`                                          │
//! │  - Returns `CmdResult`, writes only to injected streams     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - config: environment → immutable `Config`                 │
//! │  - model: `Note` paths, validation, file creation           │
//! │  - input: editor → inline stdin → path-only state machine   │
//! │  - editor, git: external tools behind traits                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degraded Capabilities
//!
//! The editor, pager and git are all optional. A missing tool is an empty
//! field in [`config::Config`], never an error; the only mandatory piece is
//! the home directory.
//!
//! ## Module Overview
//!
//! - [`config`]: Environment-driven configuration resolution
//! - [`model`]: The `Note` type
//! - [`input`]: Content acquisition state machine
//! - [`editor`]: External editor integration
//! - [`git`]: Version control integration
//! - [`commands`]: Command implementations
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod git;
pub mod input;
pub mod model;
