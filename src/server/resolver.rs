use std::fs;
use std::path::{Path, PathBuf};

/// A URL path mapped onto the document root and classified with stat
/// semantics (symlinks followed).
#[derive(Debug, PartialEq)]
pub enum Resolved {
    File(PathBuf),
    Dir(PathBuf),
    Missing,
}

/// Map `url_path` (leading `/`, already validated) into `root` and
/// classify it. A trailing slash is stripped before classification; the
/// bare root resolves to the root directory itself.
pub fn resolve(root: &Path, url_path: &str) -> Resolved {
    let rel = url_path.trim_start_matches('/').trim_end_matches('/');
    let path = if rel.is_empty() {
        root.to_path_buf()
    } else {
        root.join(rel)
    };

    classify(path)
}

fn classify(path: PathBuf) -> Resolved {
    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => Resolved::File(path),
        Ok(meta) if meta.is_dir() => Resolved::Dir(path),
        _ => Resolved::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scratch_root() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "hi").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("index.html"), "<p>hi</p>").unwrap();
        dir
    }

    #[test]
    fn classifies_regular_file() {
        let root = scratch_root();
        assert_eq!(
            resolve(root.path(), "/a.txt"),
            Resolved::File(root.path().join("a.txt"))
        );
    }

    #[test]
    fn classifies_directory_with_and_without_slash() {
        let root = scratch_root();
        let expected = Resolved::Dir(root.path().join("sub"));
        assert_eq!(resolve(root.path(), "/sub"), expected);
        let expected = Resolved::Dir(root.path().join("sub"));
        assert_eq!(resolve(root.path(), "/sub/"), expected);
    }

    #[test]
    fn bare_root_is_the_root_directory() {
        let root = scratch_root();
        assert_eq!(
            resolve(root.path(), "/"),
            Resolved::Dir(root.path().to_path_buf())
        );
    }

    #[test]
    fn missing_paths() {
        let root = scratch_root();
        assert_eq!(resolve(root.path(), "/nope"), Resolved::Missing);
        assert_eq!(resolve(root.path(), "/sub/nope.txt"), Resolved::Missing);
    }

    #[test]
    fn trailing_slash_on_a_file_still_finds_it() {
        // The slash is stripped before classification, as in the original
        // server; whether that is desirable is a client problem.
        let root = scratch_root();
        assert_eq!(
            resolve(root.path(), "/a.txt/"),
            Resolved::File(root.path().join("a.txt"))
        );
    }
}
