//! Builds aggregation trees from a real directory hierarchy.
//!
//! Directories become aggregates, files become leaves whose payload is the
//! on-disk byte size. Entries are visited sorted by file name, so child
//! order is deterministic across runs.

use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use tracing::instrument;
use walkdir::WalkDir;

use crate::domain::node::Node;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("internal tree operation failed: {0}")]
    Internal(String),
}

/// Result type for tree building.
pub type BuildResult<T> = Result<T, BuildError>;

/// Constructs a `Node` tree from a directory scan.
///
/// Symlinks are not followed, so filesystem loops cannot enter the tree.
#[derive(Debug, Default)]
pub struct FsTreeBuilder {
    filter: Option<Regex>,
}

impl FsTreeBuilder {
    pub fn new() -> Self {
        Self { filter: None }
    }

    /// Only include files whose name matches `filter`. Directories are
    /// always kept, so the shape of the hierarchy stays visible.
    pub fn matching(mut self, filter: Regex) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Scan `directory_path` into an aggregate named after the directory.
    #[instrument(level = "debug", skip(self))]
    pub fn build_from_directory(&self, directory_path: &Path) -> BuildResult<Node> {
        if !directory_path.exists() {
            return Err(BuildError::DirectoryNotFound(directory_path.to_path_buf()));
        }
        if !directory_path.is_dir() {
            return Err(BuildError::NotADirectory(directory_path.to_path_buf()));
        }

        let root_name = directory_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| directory_path.display().to_string());

        // Stack of open aggregates: stack[d] is the aggregate for the
        // directory at walk depth d. An entry at depth d attaches to
        // stack[d - 1] once everything deeper has been folded back.
        let mut stack: Vec<Node> = vec![Node::aggregate(root_name)];

        for entry in WalkDir::new(directory_path)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;
            let depth = entry.depth();

            while stack.len() > depth {
                Self::fold_top(&mut stack)?;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if entry.file_type().is_dir() {
                stack.push(Node::aggregate(name));
            } else if entry.file_type().is_file() {
                if let Some(filter) = &self.filter {
                    if !filter.is_match(&name) {
                        continue;
                    }
                }
                let size = entry.metadata()?.len();
                Self::attach_to_top(&mut stack, Node::leaf(name, size))?;
            }
            // Symlinks and special files are skipped
        }

        while stack.len() > 1 {
            Self::fold_top(&mut stack)?;
        }

        stack
            .pop()
            .ok_or_else(|| BuildError::Internal("empty build stack".to_string()))
    }

    fn fold_top(stack: &mut Vec<Node>) -> BuildResult<()> {
        let done = stack
            .pop()
            .ok_or_else(|| BuildError::Internal("empty build stack".to_string()))?;
        Self::attach_to_top(stack, done)
    }

    fn attach_to_top(stack: &mut [Node], child: Node) -> BuildResult<()> {
        let parent = stack
            .last_mut()
            .ok_or_else(|| BuildError::Internal("no open aggregate".to_string()))?;
        parent
            .add_child(child)
            .map_err(|e| BuildError::Internal(e.to_string()))
    }
}
