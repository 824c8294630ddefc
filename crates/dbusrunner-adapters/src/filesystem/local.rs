//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use dbusrunner_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{RunnerError, RunnerResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> RunnerResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> RunnerResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_executable(&self, path: &Path) -> RunnerResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata =
                std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
            let mut perms = metadata.permissions();
            perms.set_mode(perms.mode() | 0o111);
            std::fs::set_permissions(path, perms)
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            let _ = path;
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> RunnerResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> RunnerError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_removes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("proj/src");

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("main.rs"), "fn main() {}").unwrap();
        assert!(fs.exists(&dir.join("main.rs")));

        fs.remove_dir_all(&tmp.path().join("proj")).unwrap();
        assert!(!fs.exists(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn set_executable_adds_exec_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("run.sh");
        let fs = LocalFilesystem::new();
        fs.write_file(&file, "#!/bin/sh\n").unwrap();
        fs.set_executable(&file).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }

    #[test]
    fn write_into_missing_dir_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&tmp.path().join("missing/file"), "x")
            .unwrap_err();
        assert!(matches!(
            err,
            RunnerError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
