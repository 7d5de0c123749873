//! # iamgraph-error
//!
//! Unified error handling for iamgraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., EngineMissing, RenderFailed)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use iamgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidNodeRef, "edge endpoint out of range")
//!         .with_operation("diagram::validate")
//!         .with_context("edge", "3"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, iamgraph_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the iamgraph Error
pub type Result<T> = std::result::Result<T, Error>;
