//! Thin-node arena AST for the jshake bundler core.
//!
//! The tree is stored as a flat vector of 16-byte `Node` headers plus typed
//! data pools, one pool per structural node family. Parents are recorded in a
//! parallel `ExtendedNodeInfo` pool as non-owning `NodeIndex` back-pointers;
//! ownership is strictly arena → node → (indices of) children.

pub mod base;
pub use base::{NodeIndex, NodeList};

pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

pub mod node;
pub use node::*;

pub mod arena;
pub use arena::NodeArena;
