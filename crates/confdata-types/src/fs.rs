//! Filesystem access for path data types
//!
//! Path validation goes through the [`FileSystem`] trait so callers decide
//! when the side-effecting check runs and tests can use [`MemoryFs`].

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// What a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file
    File {
        /// True if any execute bit is set
        executable: bool,
    },
    /// A directory
    Directory,
    /// Anything else (socket, fifo, device)
    Other,
}

/// Read-only view of a filesystem.
pub trait FileSystem: Send + Sync {
    /// Stat a path, following symlinks.
    ///
    /// Returns `Ok(None)` when nothing exists at the path.
    fn entry(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Directories searched for bare executable names, in priority order.
    fn search_path(&self) -> Vec<PathBuf>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn entry(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        (**self).entry(path)
    }

    fn search_path(&self) -> Vec<PathBuf> {
        (**self).search_path()
    }
}

/// The host filesystem.
///
/// The search path is read from `PATH` on every lookup unless it was set
/// explicitly with [`LocalFs::with_search_path`].
#[derive(Debug, Clone, Default)]
pub struct LocalFs {
    search_path: Option<Vec<PathBuf>>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed list of directories instead of `PATH`.
    pub fn with_search_path(mut self, dirs: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.search_path = Some(dirs.into_iter().map(Into::into).collect());
        self
    }
}

impl FileSystem for LocalFs {
    fn entry(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                log::trace!("stat {}: not found", path.display());
                return Ok(None);
            }
            Err(err) => {
                log::debug!("stat {} failed: {}", path.display(), err);
                return Err(err);
            }
        };

        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File {
                executable: is_executable(&metadata),
            }
        } else {
            EntryKind::Other
        };
        log::trace!("stat {}: {:?}", path.display(), kind);
        Ok(Some(kind))
    }

    fn search_path(&self) -> Vec<PathBuf> {
        match &self.search_path {
            Some(dirs) => dirs.clone(),
            None => std::env::var_os("PATH")
                .map(|path| std::env::split_paths(&path).collect())
                .unwrap_or_default(),
        }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &std::fs::Metadata) -> bool {
    // No execute bits to inspect; any regular file counts.
    true
}

/// In-memory filesystem.
///
/// Adding an entry also adds its ancestors as directories.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: HashMap<PathBuf, EntryKind>,
    search_path: Vec<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular, non-executable file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::File { executable: false });
        self
    }

    /// Add a regular file with execute permission.
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::File { executable: true });
        self
    }

    /// Add a directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::Directory);
        self
    }

    /// Append a directory to the search path.
    pub fn with_search_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_path.push(path.into());
        self
    }

    /// Remove an entry, leaving its ancestors in place.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<EntryKind> {
        self.entries.remove(path.as_ref())
    }

    fn insert(&mut self, path: PathBuf, kind: EntryKind) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Directory);
        }
        self.entries.insert(path, kind);
    }
}

impl FileSystem for MemoryFs {
    fn entry(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        Ok(self.entries.get(path).copied())
    }

    fn search_path(&self) -> Vec<PathBuf> {
        self.search_path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_fs_adds_ancestors() {
        let fs = MemoryFs::new().with_file("/opt/tool/config.yml");

        assert_eq!(
            fs.entry(Path::new("/opt/tool/config.yml")).unwrap(),
            Some(EntryKind::File { executable: false })
        );
        assert_eq!(
            fs.entry(Path::new("/opt/tool")).unwrap(),
            Some(EntryKind::Directory)
        );
        assert_eq!(fs.entry(Path::new("/")).unwrap(), Some(EntryKind::Directory));
        assert_eq!(fs.entry(Path::new("/opt/other")).unwrap(), None);
    }

    #[test]
    fn test_memory_fs_remove() {
        let mut fs = MemoryFs::new().with_executable("/bin/run");
        assert!(fs.remove("/bin/run").is_some());
        assert_eq!(fs.entry(Path::new("/bin/run")).unwrap(), None);
        assert_eq!(fs.entry(Path::new("/bin")).unwrap(), Some(EntryKind::Directory));
    }

    #[test]
    fn test_local_fs_explicit_search_path() {
        let fs = LocalFs::new().with_search_path(["/a", "/b"]);
        assert_eq!(
            fs.search_path(),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
    }

    #[test]
    fn test_local_fs_missing_path() {
        let fs = LocalFs::new();
        assert_eq!(
            fs.entry(Path::new("/path/that/does/not/exist")).unwrap(),
            None
        );
    }
}
