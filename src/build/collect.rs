//! Post-build static collection: copy every static root into one directory.

use std::fs;
use std::path::Path;

use crate::build::BuildError;

/// Copy the contents of each existing `source` into `dest`, later sources
/// overwriting earlier ones. Returns the number of files copied.
pub fn collect_static<P: AsRef<Path>>(sources: &[P], dest: &Path) -> Result<usize, BuildError> {
    let to_error = |source| BuildError::Collect {
        dest: dest.to_path_buf(),
        source,
    };

    fs::create_dir_all(dest).map_err(to_error)?;

    let mut copied = 0;
    for source in sources {
        let source = source.as_ref();
        if !source.is_dir() {
            tracing::debug!(source = %source.display(), "Skipping missing static root");
            continue;
        }
        copied += copy_tree(source, dest).map_err(to_error)?;
    }

    tracing::info!(files = copied, dest = %dest.display(), "Static files collected");
    Ok(copied)
}

fn copy_tree(from: &Path, to: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_tree(&entry.path(), &target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_nested_files_from_all_roots() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();

        fs::create_dir_all(a.path().join("js")).unwrap();
        fs::write(a.path().join("js/main.js"), "a").unwrap();
        fs::write(a.path().join("shared.txt"), "from a").unwrap();
        fs::create_dir_all(b.path().join("css/nested")).unwrap();
        fs::write(b.path().join("css/nested/site.css"), "b").unwrap();
        fs::write(b.path().join("shared.txt"), "from b").unwrap();

        let missing = a.path().join("does-not-exist");
        let count = collect_static(
            &[a.path().to_path_buf(), missing, b.path().to_path_buf()],
            &dest.path().join("out"),
        )
        .unwrap();

        assert_eq!(count, 4);
        let out = dest.path().join("out");
        assert_eq!(fs::read_to_string(out.join("js/main.js")).unwrap(), "a");
        assert_eq!(fs::read_to_string(out.join("css/nested/site.css")).unwrap(), "b");
        assert_eq!(fs::read_to_string(out.join("shared.txt")).unwrap(), "from b");
    }
}
