//! Diagram data model for iamgraph.
//!
//! Everything here is ephemeral: a [`Diagram`] is built once, read once by
//! the DOT emitter, and dropped. Nodes and edges are never mutated after
//! declaration.
//!
//! # Module Structure
//!
//! - [`types`]: copy enums for node kinds, edge colors, styles and access levels
//! - [`diagram`]: the write-once [`Diagram`] builder and its structural checks

pub mod diagram;
pub mod types;

pub use diagram::{Diagram, Edge, EdgeAttrs, Node, NodeId};
pub use types::{AccessLevel, EdgeColor, EdgeStyle, NodeKind, ResourceKind};
