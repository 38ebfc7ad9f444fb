//! Box-drawing tree rendering via termtree, as an alternative to the
//! plain indented transcript from `Node::describe`.

use termtree::Tree;
use tracing::instrument;

use crate::domain::node::{Metric, Node};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for Node {
    #[instrument(level = "debug", skip(self), fields(name = %self.name()))]
    fn to_tree_string(&self) -> Tree<String> {
        let label = match self.payload() {
            Some(payload) => format!("{} ({})", self.name(), payload),
            None => self.name().to_string(),
        };

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string())
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}

const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a metric as a binary-prefixed size string, `1536 -> "1.5 KiB"`.
pub fn human_size(metric: Metric) -> String {
    let mut value = metric as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", metric, UNITS[unit])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_stay_in_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(1023), "1023 B");
    }

    #[test]
    fn larger_values_scale_up() {
        assert_eq!(human_size(1024), "1.0 KiB");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
