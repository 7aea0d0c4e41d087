use std::collections::BTreeSet;
use std::fs;

use log::warn;

/// Read-only view of a filesystem, narrowed to what the compiler search needs.
///
/// None of these report errors: a path that cannot be inspected is a path that
/// does not exist.
pub trait Probe {
    /// `true` when `path` exists and is a directory.
    fn dir_exists(&self, path: &str) -> bool;

    /// Names of the direct child directories of `path`.
    fn subdirs(&self, path: &str) -> Vec<String>;

    /// `true` when `path` exists and is not a directory.
    fn file_exists(&self, path: &str) -> bool;
}

impl<P: Probe + ?Sized> Probe for &P {
    fn dir_exists(&self, path: &str) -> bool {
        (**self).dir_exists(path)
    }

    fn subdirs(&self, path: &str) -> Vec<String> {
        (**self).subdirs(path)
    }

    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFs;

impl Probe for HostFs {
    fn dir_exists(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn subdirs(&self, path: &str) -> Vec<String> {
        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("cannot list `{path}`: {err}");
                return vec![];
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }

    fn file_exists(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|m| !m.is_dir())
    }
}

/// In-memory directory tree keyed by `/`-separated paths.
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    dirs: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl MemoryFs {
    pub fn new() -> MemoryFs {
        MemoryFs::default()
    }

    /// Adds a directory and all of its ancestors.
    pub fn with_dir(mut self, path: &str) -> MemoryFs {
        self.add_dir(path);
        self
    }

    /// Adds a file; its ancestors become directories.
    pub fn with_file(mut self, path: &str) -> MemoryFs {
        let path = normalize(path);
        if let Some((parent, _)) = path.rsplit_once('/') {
            self.add_dir(parent);
        }
        self.files.insert(path.to_string());
        self
    }

    fn add_dir(&mut self, path: &str) {
        let mut current = normalize(path);
        while !current.is_empty() {
            self.dirs.insert(current.to_string());
            match current.rsplit_once('/') {
                Some((parent, _)) => current = parent,
                None => break,
            }
        }
    }
}

impl Probe for MemoryFs {
    fn dir_exists(&self, path: &str) -> bool {
        self.dirs.contains(normalize(path))
    }

    fn subdirs(&self, path: &str) -> Vec<String> {
        let prefix = format!("{}/", normalize(path));
        self.dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(&prefix))
            .filter(|rest| !rest.is_empty() && !rest.contains('/'))
            .map(str::to_string)
            .collect()
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains(normalize(path))
    }
}

fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}

#[cfg(test)]
mod test {
    use std::fs::File;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn memory_fs_creates_ancestors() {
        let fs = MemoryFs::new().with_file("C:/fpc/3.2.2/bin/i386-win32/fpc.exe");
        assert!(fs.dir_exists("C:/fpc"));
        assert!(fs.dir_exists("C:/fpc/3.2.2/bin/"));
        assert!(fs.file_exists("C:/fpc/3.2.2/bin/i386-win32/fpc.exe"));
        assert!(!fs.dir_exists("C:/fpc/3.2.2/bin/i386-win32/fpc.exe"));
        assert!(!fs.file_exists("C:/fpc"));
    }

    #[test]
    fn memory_fs_lists_direct_children_only() {
        let fs = MemoryFs::new()
            .with_dir("C:/fpc/3.2.2/bin")
            .with_dir("C:/fpc/3.0.0")
            .with_file("C:/fpc/readme.txt");
        let mut subdirs = fs.subdirs("C:/fpc");
        subdirs.sort();
        assert_eq!(subdirs, vec!["3.0.0", "3.2.2"]);
    }

    #[test]
    fn host_fs_probes() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let root = dir.path();
        std::fs::create_dir_all(root.join("3.2.2").join("bin"))?;
        std::fs::create_dir(root.join("other"))?;
        File::create(root.join("3.3.0"))?;

        let root = root.to_str().ok_or(anyhow::anyhow!("non utf-8 temp dir"))?;
        let fs = HostFs;

        assert!(fs.dir_exists(root));
        assert!(!fs.file_exists(root));
        assert!(fs.file_exists(&format!("{root}/3.3.0")));
        assert!(!fs.dir_exists(&format!("{root}/3.3.0")));
        assert!(!fs.dir_exists(&format!("{root}/missing")));

        let mut subdirs = fs.subdirs(root);
        subdirs.sort();
        assert_eq!(subdirs, vec!["3.2.2", "other"]);
        Ok(())
    }

    #[test]
    fn host_fs_missing_dir_lists_nothing() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("missing");
        let missing = missing.to_str().ok_or(anyhow::anyhow!("non utf-8 temp dir"))?;
        assert!(HostFs.subdirs(missing).is_empty());
        Ok(())
    }
}
