//! Git restore collaborator for switchenv.
//!
//! Restores the env file to its last committed content so a switch can be
//! undone. The rewrite engine has no involvement here — this is a plain
//! "put the committed bytes back" operation.

pub mod error;
pub mod restore;

pub use error::{Error, Result};
pub use restore::restore_from_head;
