use crate::serialization::TaskDocument;
use crate::store::{archiver::Archiver, atomic_writer::AtomicWriter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use weekplan_core::{LoadFailurePolicy, WeekplanError, WeekplanResult};
use weekplan_domain::{Task, TaskStore};

/// `tasks.json` on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
    load_failure: LoadFailurePolicy,
    archiver: Archiver,
}

impl JsonTaskStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            load_failure: LoadFailurePolicy::default(),
            archiver: Archiver::default(),
        }
    }

    pub fn with_load_failure(mut self, policy: LoadFailurePolicy) -> Self {
        self.load_failure = policy;
        self
    }

    pub fn with_max_backups(mut self, max_backups: Option<usize>) -> Self {
        self.archiver = Archiver::new(max_backups);
        self
    }

    fn read_document(&self) -> WeekplanResult<Vec<Task>> {
        let bytes =
            AtomicWriter::read_all(&self.path).map_err(|source| WeekplanError::StoreUnavailable {
                path: self.path.clone(),
                source,
            })?;
        let document = TaskDocument::decode(&bytes).map_err(|e| WeekplanError::DecodeFailure {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(document.tasks)
    }
}

impl TaskStore for JsonTaskStore {
    fn load(&self) -> WeekplanResult<Vec<Task>> {
        match self.read_document() {
            Ok(tasks) => {
                tracing::info!("Loaded {} tasks from {}", tasks.len(), self.path.display());
                Ok(tasks)
            }
            Err(e) if e.is_load_failure() && self.load_failure == LoadFailurePolicy::Degrade => {
                match &e {
                    WeekplanError::StoreUnavailable { source, .. }
                        if source.kind() == ErrorKind::NotFound =>
                    {
                        tracing::info!(
                            "No task store at {}, starting empty",
                            self.path.display()
                        );
                    }
                    _ => tracing::warn!("{}; starting with an empty board", e),
                }
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, tasks: &[Task]) -> WeekplanResult<()> {
        let bytes = TaskDocument::encode(tasks).map_err(|e| WeekplanError::EncodeFailure {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if let Err(e) = self.archiver.archive(&self.path) {
            tracing::warn!("{}; saving without a backup", e);
        }

        AtomicWriter::write_atomic(&self.path, &bytes)?;
        tracing::info!(
            "Saved {} tasks ({} bytes) to {}",
            tasks.len(),
            bytes.len(),
            self.path.display()
        );

        if let Err(e) = self.archiver.rotate(&self.path) {
            tracing::warn!("Backup rotation failed: {}", e);
        }
        Ok(())
    }
}
