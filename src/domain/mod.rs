//! Domain layer: the node record, its handles, and the arena that owns them
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod arena;
pub mod error;
pub mod node;
pub mod policy;

pub use arena::{NodeArena, NodeId};
pub use error::{NodeError, NodeResult};
pub use node::Node;
pub use policy::CountPolicy;
