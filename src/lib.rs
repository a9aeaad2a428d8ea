//! Binary search tree node with arena-owned, non-owning child links.
//!
//! [`Node<T>`] is a passive record: a value, a left and right [`NodeId`]
//! link, and an occurrence counter. Nodes never own their children; every
//! allocation belongs to a [`NodeArena<T>`], which is the only place nodes are
//! released. Tree policy (ordering, balancing, traversal) is left to whatever
//! builds on top.
//!
//! ```
//! use bst_node::{NodeArena, NodeError};
//!
//! let mut arena = NodeArena::new();
//! let root = arena.insert(5);
//! let left = arena.insert(3);
//! arena.set_left(root, Some(left))?;
//!
//! let node = arena.node(root)?;
//! assert_eq!(node.left(), Some(left));
//! assert_eq!(*arena.node(left)?.value(), 3);
//! # Ok::<(), NodeError>(())
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod util;

pub use config::Settings;
pub use domain::{CountPolicy, Node, NodeArena, NodeError, NodeId, NodeResult};
pub use errors::{BstError, BstResult};
