use std::path::{Path, PathBuf};

/// Expand `~` and `$VAR` references in a path argument.
///
/// Expansion failures (e.g. an undefined variable) leave the path as given.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Canonicalize when possible, keep the original path otherwise.
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_path(Path::new("/tmp/data")), PathBuf::from("/tmp/data"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let expanded = expand_path(Path::new("~/data"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
    }
}
