pub mod builder;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use builder::{BuildError, BuildResult, FsTreeBuilder};
pub use domain::{
    human_size, Metric, Node, NodeError, NodeId, NodeResult, TreeDisplay, INDENT_STEP,
};
