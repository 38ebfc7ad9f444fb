//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::RenderKind;

/// Hierarchical aggregation trees: scan, measure, and render directory hierarchies
#[derive(Parser, Debug)]
#[command(name = "aggtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a directory as an aggregation tree
    Tree {
        /// Directory to scan
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only include files whose name matches this regex
        #[arg(short, long)]
        filter: Option<String>,

        /// Rendering style (overrides config)
        #[arg(short, long, value_enum)]
        render: Option<RenderKind>,

        /// List the N largest leaves after the tree
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Print the aggregated measure of a directory
    Measure {
        /// Directory to scan
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only include files whose name matches this regex
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// List leaf nodes, one per line
    Leaves {
        /// Directory to scan
        #[arg(value_hint = ValueHint::DirPath)]
        dir: PathBuf,

        /// Only include files whose name matches this regex
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Run a built-in demonstration tree
    Demo {
        /// Which demonstration to run
        #[arg(value_enum, default_value = "filesystem")]
        scenario: Scenario,
    },

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Built-in demonstration trees.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Scenario {
    /// Nested folders and files with byte sizes
    Filesystem,
    /// Managers aggregating reports by headcount
    Orgchart,
    /// Grouped shapes aggregating control points
    Drawing,
}
