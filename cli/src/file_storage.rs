//! Session storage as one JSON file per key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential store persists the session after every transition. Each
//! CLI invocation restores it from here, so `pdu sign-in` followed by
//! `pdu outputs list` behaves like a reload of the web console.
//!
//! The session holds the device password in clear text. On Unix the
//! directory is created `0700` and every file is written `0600`.

#[cfg(test)]
#[path = "file_storage_test.rs"]
mod file_storage_test;

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use console_core::util::storage::{KeyValueStorage, StorageError};

/// Directory name under the platform config directory.
const APP_DIR: &str = "pdu-cli";

/// Default session directory.
/// - macOS: ~/Library/Application Support/pdu-cli/
/// - Linux: ~/.config/pdu-cli/
pub fn default_session_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Key/value storage rooted at a directory.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Characters outside `[A-Za-z0-9._-]` become `_`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Unavailable(format!("{}: {e}", self.dir.display()))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        create_private_dir(&self.dir).map_err(|e| StorageError::Write(format!("{}: {e}", self.dir.display())))?;
        let path = self.path_for(key);
        write_private(&path, value).map_err(|e| StorageError::Write(format!("{}: {e}", path.display())))
    }
}

fn create_private_dir(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o700);
    builder.create(dir)
}

fn write_private(path: &Path, value: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);
    let mut file = options.open(path)?;
    // `mode` only applies on creation; tighten files left by older writes.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(value.as_bytes())
}
