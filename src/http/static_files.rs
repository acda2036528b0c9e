//! Local static file lookup over the search path.
//!
//! # Responsibilities
//! - Map a URL path below the static prefix onto the first root holding it
//! - Refuse anything that could escape a root
//!
//! # Design Decisions
//! - Roots are searched in order; the first existing regular file wins
//! - Directories never match (no index files for assets)

use std::path::{Component, Path, PathBuf};

/// Ordered list of static roots.
#[derive(Debug, Clone, Default)]
pub struct StaticFiles {
    roots: Vec<PathBuf>,
}

impl StaticFiles {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find `relative` (a URL path without the static prefix) under the roots.
    pub async fn find(&self, relative: &str) -> Option<PathBuf> {
        let relative = sanitize(relative)?;

        for root in &self.roots {
            let candidate = root.join(&relative);
            match tokio::fs::metadata(&candidate).await {
                Ok(meta) if meta.is_file() => return Some(candidate),
                _ => continue,
            }
        }
        None
    }
}

/// Decode and normalize a URL path into a relative filesystem path.
fn sanitize(relative: &str) -> Option<PathBuf> {
    let decoded = urlencoding::decode(relative).ok()?;
    if decoded.contains('\0') || decoded.contains('\\') {
        return None;
    }

    let mut path = PathBuf::new();
    for segment in decoded.split('/').filter(|s| !s.is_empty() && *s != ".") {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => path.push(name),
            _ => return None,
        }
    }

    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("js/main.js"), Some(PathBuf::from("js/main.js")));
        assert_eq!(sanitize("/js//./main.js"), Some(PathBuf::from("js/main.js")));
        assert_eq!(sanitize("media/a%20b.png"), Some(PathBuf::from("media/a b.png")));
        assert_eq!(sanitize("../etc/passwd"), None);
        assert_eq!(sanitize("js/%2e%2e/secret"), None);
        assert_eq!(sanitize("a\\b"), None);
        assert_eq!(sanitize(""), None);
        assert_eq!(sanitize("/"), None);
    }

    #[tokio::test]
    async fn test_first_root_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(first.path().join("js")).unwrap();
        std::fs::create_dir_all(second.path().join("js")).unwrap();
        std::fs::write(first.path().join("js/shared.js"), "first").unwrap();
        std::fs::write(second.path().join("js/shared.js"), "second").unwrap();
        std::fs::write(second.path().join("js/only.js"), "second").unwrap();

        let files = StaticFiles::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        assert_eq!(
            files.find("js/shared.js").await,
            Some(first.path().join("js/shared.js"))
        );
        assert_eq!(
            files.find("js/only.js").await,
            Some(second.path().join("js/only.js"))
        );
        assert_eq!(files.find("js/missing.js").await, None);
        // directories are not files
        assert_eq!(files.find("js").await, None);
    }
}
