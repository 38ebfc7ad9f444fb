//! Domain layer: the aggregation tree and its operations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod iter;
pub mod node;
pub mod render;

pub use error::{NodeError, NodeResult};
pub use iter::{DepthFirstIter, PostOrderIter};
pub use node::{Metric, Node, NodeId, INDENT_STEP};
pub use render::{human_size, TreeDisplay};
