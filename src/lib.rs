//! tsctl - Qt Linguist translation catalog toolkit
//!
//! tsctl is a CLI tool and library for reading, checking and maintaining
//! Qt Linguist `.ts` translation catalogs: load a catalog, look strings up
//! with source-text fallback, write it back in lupdate layout, and lint it
//! for broken placeholders, duplicates and untranslated entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, parser, writer, lookup and maintenance
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Catalog checks
//! - `utils`: Shared text helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
