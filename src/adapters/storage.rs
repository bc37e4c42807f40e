use crate::domain::ports::RecordStore;
use crate::utils::error::{Result, RosterError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_RECORD_BOOK: &str = "RecordBook.txt";

/// The record book as a single plain-text file, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    path: PathBuf,
}

impl FileRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileRecordStore {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_BOOK)
    }
}

impl RecordStore for FileRecordStore {
    fn load(&self) -> Result<Option<String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // bad encoding is corrupt data, not an unreadable file
        String::from_utf8(bytes).map(Some).map_err(|e| {
            let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
            RosterError::MalformedRecord {
                line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
                message: "record book is not valid UTF-8".to_string(),
            }
        })
    }

    fn save(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
