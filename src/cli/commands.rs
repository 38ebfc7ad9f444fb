//! Command dispatch: each subcommand builds a tree and queries it.

use std::cmp::Reverse;
use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use regex::Regex;
use tracing::{debug, instrument};

use crate::builder::FsTreeBuilder;
use crate::cli::args::{Cli, Commands, Scenario};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{RenderKind, Settings};
use crate::domain::{human_size, Metric, Node, TreeDisplay};
use crate::util::path::{canonicalize_lenient, expand_path};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree {
            dir,
            filter,
            render,
            top,
        }) => _tree(dir, filter.as_deref(), *render, *top),
        Some(Commands::Measure { dir, filter }) => _measure(dir, filter.as_deref()),
        Some(Commands::Leaves { dir, filter }) => _leaves(dir, filter.as_deref()),
        Some(Commands::Demo { scenario }) => _demo(*scenario),
        Some(Commands::Config) => _config(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

fn scan(dir: &Path, filter: Option<&str>) -> CliResult<Node> {
    let mut builder = FsTreeBuilder::new();
    if let Some(pattern) = filter {
        let regex = Regex::new(pattern)
            .map_err(|e| CliError::InvalidArgs(format!("invalid filter pattern: {e}")))?;
        builder = builder.matching(regex);
    }
    Ok(builder.build_from_directory(dir)?)
}

fn format_metric(metric: Metric, human: bool) -> String {
    if human {
        human_size(metric)
    } else {
        metric.to_string()
    }
}

#[instrument]
fn _tree(
    dir: &Path,
    filter: Option<&str>,
    render: Option<RenderKind>,
    top: Option<usize>,
) -> CliResult<()> {
    let dir = canonicalize_lenient(&expand_path(dir));
    debug!("scanning {:?}", dir);
    let settings = Settings::load(Some(&dir))?;
    let node = scan(&dir, filter)?;

    match render.unwrap_or(settings.render) {
        RenderKind::Plain => {
            for line in node.describe(0) {
                output::info(&line);
            }
        }
        RenderKind::Fancy => output::info(&node.to_tree_string()),
    }
    output::action("Total", &format_metric(node.measure(), settings.human_sizes));

    if let Some(n) = top {
        output::header("Largest leaves");
        let largest = node
            .iter()
            .map(|(node, _)| node)
            .filter(|node| node.is_leaf())
            .sorted_by_key(|node| Reverse(node.measure()))
            .take(n);
        for leaf in largest {
            output::detail(&format!(
                "{:>10}  {}",
                format_metric(leaf.measure(), settings.human_sizes),
                leaf.name()
            ));
        }
    }
    Ok(())
}

#[instrument]
fn _measure(dir: &Path, filter: Option<&str>) -> CliResult<()> {
    let dir = canonicalize_lenient(&expand_path(dir));
    let settings = Settings::load(Some(&dir))?;
    let node = scan(&dir, filter)?;
    output::info(&format_metric(node.measure(), settings.human_sizes));
    Ok(())
}

#[instrument]
fn _leaves(dir: &Path, filter: Option<&str>) -> CliResult<()> {
    let dir = canonicalize_lenient(&expand_path(dir));
    let node = scan(&dir, filter)?;
    for name in node.leaf_nodes() {
        output::info(&name);
    }
    Ok(())
}

#[instrument]
fn _demo(scenario: Scenario) -> CliResult<()> {
    let settings = Settings::load(None)?;
    match scenario {
        Scenario::Filesystem => demo_filesystem(&settings),
        Scenario::Orgchart => demo_orgchart(),
        Scenario::Drawing => demo_drawing(),
    }
}

/// Nested folders with byte-sized files, including a mutation round-trip.
fn demo_filesystem(settings: &Settings) -> CliResult<()> {
    let mut vacation = Node::aggregate("Vacation Photos");
    vacation.add_child(Node::leaf("beach.jpg", 1536))?;
    vacation.add_child(Node::leaf("mountain.jpg", 1792))?;

    let mut pictures = Node::aggregate("Pictures");
    pictures.add_child(Node::leaf("image.jpg", 2048))?;
    pictures.add_child(vacation)?;

    let mut videos = Node::aggregate("Videos");
    videos.add_child(Node::leaf("video.mp4", 5120))?;

    let readme = Node::leaf("readme.md", 512);
    let readme_id = readme.id();

    let mut root = Node::aggregate("My Documents");
    root.add_child(Node::leaf("document.txt", 1024))?;
    root.add_child(readme)?;
    root.add_child(pictures)?;
    root.add_child(videos)?;

    output::header("File system structure");
    for line in root.describe(0) {
        output::info(&line);
    }
    output::action(
        "Total",
        &format_metric(root.measure(), settings.human_sizes),
    );
    output::action(
        "Pictures only",
        &format_metric(root.child_at(2)?.measure(), settings.human_sizes),
    );

    output::header("After removing readme.md");
    root.remove_child(readme_id)?;
    output::action(
        "Total",
        &format_metric(root.measure(), settings.human_sizes),
    );
    Ok(())
}

/// Managers aggregate the headcount of their reports.
fn demo_orgchart() -> CliResult<()> {
    let mut project = Node::aggregate("David, Project Manager");
    project.add_child(Node::leaf("Alice, Backend Developer", 1))?;
    project.add_child(Node::leaf("Charlie, UI/UX Designer", 1))?;

    let mut general = Node::aggregate("Eve, General Manager");
    general.add_child(project)?;
    general.add_child(Node::leaf("Bob, Frontend Developer", 1))?;

    output::header("Organization chart");
    for line in general.describe(0) {
        output::info(&line);
    }
    output::action("Headcount", &general.measure());
    Ok(())
}

/// Grouped shapes aggregate their control-point counts.
fn demo_drawing() -> CliResult<()> {
    let mut group = Node::aggregate("group");
    group.add_child(Node::leaf("red circle", 1))?;
    group.add_child(Node::leaf("green rectangle", 4))?;

    let mut canvas = Node::aggregate("canvas");
    canvas.add_child(Node::leaf("blue circle", 1))?;
    canvas.add_child(group)?;

    output::header("Drawing");
    for line in canvas.describe(0) {
        output::info(&line);
    }
    output::action("Control points", &canvas.measure());
    Ok(())
}

#[instrument]
fn _config() -> CliResult<()> {
    let settings = Settings::load(None)?;
    output::info(&toml::to_string_pretty(&settings)?);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
