//! Block segmentation and activation rewriting for switchenv.
//!
//! An env file is a flat sequence of `KEY=value` lines grouped into named
//! blocks by header lines of the form:
//!
//! ```text
//! NODE_ENV=Development
//!
//! ## Dev
//! API_TOKEN=ABC123
//!
//! ## Staging
//! # API_TOKEN=XYZ890
//! ```
//!
//! This crate turns raw file text into a [`Document`] of classified lines
//! and named blocks, reports which blocks are currently active (have at
//! least one uncommented variable), and rewrites the text so that exactly a
//! chosen set of blocks is active — commenting and uncommenting variable
//! lines while leaving every other byte of the file untouched.
//!
//! Both passes are total functions: any string input segments into a
//! document, and rewriting any document with any selection yields valid
//! output. Nothing in this crate performs I/O.

pub mod parser;
pub mod writer;

pub use parser::{Block, BlockName, Document, Line, Role, Terminator, segment};
pub use writer::{active_blocks, apply};
