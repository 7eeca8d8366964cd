//! JSON-backed result history.
//!
//! The log is a single JSON array of [`DatabaseRecord`]s. It is read in full
//! when a run starts and rewritten in full when the run is saved.

use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::DatabaseRecord;

/// The persisted history of runs.
#[derive(Debug)]
pub struct ResultStore {
    path: PathBuf,
    records: Vec<DatabaseRecord>,
}

impl ResultStore {
    /// Open the log at `path`, creating it (and its parent directory) if needed.
    ///
    /// I/O failures are returned as errors. Content that does not parse as a
    /// record list is treated as an empty history.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(path)
            .with_context(|| format!("failed to open result log {}", path.display()))?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)
            .with_context(|| format!("failed to read result log {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            records: decode(&content, path),
        })
    }

    /// Read the log without creating it. A missing file is an empty history.
    pub fn load(path: &Path) -> Result<Vec<DatabaseRecord>> {
        match std::fs::read(path) {
            Ok(content) => Ok(decode(&content, path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read result log {}", path.display()))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records in the order they were appended, oldest first.
    pub fn records(&self) -> &[DatabaseRecord] {
        &self.records
    }

    pub fn append(&mut self, record: DatabaseRecord) {
        self.records.push(record);
    }

    /// Rewrite the whole log.
    ///
    /// The new content goes to a temporary file next to the log and is renamed
    /// over it, so a shorter history never leaves stale bytes behind. A
    /// symlinked log is written through: the link stays and its target is
    /// replaced.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_vec(&self.records).context("failed to serialize result log")?;

        let target = std::fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&dir)
            .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;
        tmp.write_all(&json)
            .and_then(|_| tmp.as_file().sync_all())
            .context("failed to write result log")?;
        tmp.persist(&target)
            .with_context(|| format!("failed to replace result log {}", target.display()))?;

        tracing::debug!(
            path = %self.path.display(),
            records = self.records.len(),
            "result log saved"
        );
        Ok(())
    }
}

fn decode(content: &[u8], path: &Path) -> Vec<DatabaseRecord> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Vec::new();
    }
    match serde_json::from_slice(content) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "result log is not valid JSON, starting with an empty history"
            );
            Vec::new()
        }
    }
}
