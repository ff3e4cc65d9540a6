//! Filesystem-backed key-value storage using capability-scoped directories.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::board::ports::{KeyValueStorage, StorageError, StorageResult};

const FILE_EXTENSION: &str = "json";

/// Storage that keeps each key in `<key>.json` inside one directory.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so a document is either fully old or fully new.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: Arc<Dir>,
}

impl FileStorage {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created or opened.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self::from_dir(dir))
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir: Arc::new(dir) }
    }
}

fn file_name(key: &str) -> StorageResult<String> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if !valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{FILE_EXTENSION}"))
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let name = file_name(key)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = file_name(key)?;
        let staging = format!(".{name}.tmp");
        self.dir
            .write(&staging, value)
            .map_err(StorageError::backend)?;
        self.dir
            .rename(&staging, &self.dir, &name)
            .map_err(StorageError::backend)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let name = file_name(key)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::backend(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::file_name;
    use crate::board::ports::StorageError;
    use rstest::rstest;

    #[rstest]
    #[case("crm-board-state", "crm-board-state.json")]
    #[case("team_members.v1", "team_members.v1.json")]
    fn file_name_accepts_plain_keys(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(file_name(key).expect("valid key"), expected);
    }

    #[rstest]
    #[case("")]
    #[case(".hidden")]
    #[case("../escape")]
    #[case("with space")]
    fn file_name_rejects_unsafe_keys(#[case] key: &str) {
        assert!(matches!(file_name(key), Err(StorageError::InvalidKey(_))));
    }
}
