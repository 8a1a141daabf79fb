use chrono::{DateTime, Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use weekplan_core::{WeekplanError, WeekplanResult};

const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Copies the primary store to `<stem>_<YYYYMMDDTHHMMSS>.json` next to it
/// before every save, optionally pruning old copies.
#[derive(Debug, Clone, Default)]
pub struct Archiver {
    max_backups: Option<usize>,
}

impl Archiver {
    pub fn new(max_backups: Option<usize>) -> Self {
        Self { max_backups }
    }

    /// Backup path for `primary` at time `now`. A name already taken within
    /// the same second gets a `_N` suffix.
    pub fn backup_path(primary: &Path, now: DateTime<Local>) -> PathBuf {
        let (dir, stem, ext) = split_name(primary);
        let stamp = now.format(TIMESTAMP_FORMAT);
        let mut candidate = dir.join(format!("{stem}_{stamp}{ext}"));
        let mut suffix = 1;
        while candidate.exists() {
            candidate = dir.join(format!("{stem}_{stamp}_{suffix}{ext}"));
            suffix += 1;
        }
        candidate
    }

    /// Copy `primary` to a fresh backup. Returns `Ok(None)` when there is
    /// nothing to archive yet.
    pub fn archive(&self, primary: &Path) -> WeekplanResult<Option<PathBuf>> {
        if !primary.exists() {
            tracing::debug!("No existing store at {}, skipping backup", primary.display());
            return Ok(None);
        }

        let backup = Self::backup_path(primary, Local::now());
        std::fs::copy(primary, &backup).map_err(|source| WeekplanError::ArchiveFailure {
            path: backup.clone(),
            source,
        })?;

        tracing::info!("Backup of {} created at {}", primary.display(), backup.display());
        Ok(Some(backup))
    }

    /// Existing backups of `primary`, oldest first. Only names this archiver
    /// produces count; same-second copies order by their numeric suffix.
    pub fn list_backups(primary: &Path) -> WeekplanResult<Vec<PathBuf>> {
        let (dir, stem, ext) = split_name(primary);
        let mut backups: Vec<((NaiveDateTime, u32), PathBuf)> = std::fs::read_dir(&dir)?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let name = entry.file_name().to_string_lossy().to_string();
                let key = backup_key(&name, &stem, &ext)?;
                Some((key, entry.path()))
            })
            .collect();
        backups.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(backups.into_iter().map(|(_, path)| path).collect())
    }

    /// Delete all but the newest `max_backups` copies. Individual deletion
    /// failures are logged and skipped. Returns the number removed.
    pub fn rotate(&self, primary: &Path) -> WeekplanResult<usize> {
        let Some(keep) = self.max_backups else {
            return Ok(0);
        };
        let backups = Self::list_backups(primary)?;
        let excess = backups.len().saturating_sub(keep);

        let mut deleted = 0;
        for old in backups.iter().take(excess) {
            match std::fs::remove_file(old) {
                Ok(()) => deleted += 1,
                Err(e) => {
                    tracing::warn!(path = %old.display(), error = %e, "failed to delete old backup");
                }
            }
        }
        Ok(deleted)
    }
}

/// Timestamp and collision suffix of a backup name, e.g.
/// `tasks_20260307T090501_2.json` -> (2026-03-07 09:05:01, 2).
fn backup_key(name: &str, stem: &str, ext: &str) -> Option<(NaiveDateTime, u32)> {
    let rest = name.strip_prefix(stem)?.strip_prefix('_')?.strip_suffix(ext)?;
    let (stamp, suffix) = match rest.split_once('_') {
        Some((stamp, suffix)) => (stamp, suffix.parse().ok()?),
        None => (rest, 0),
    };
    let when = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some((when, suffix))
}

fn split_name(primary: &Path) -> (PathBuf, String, String) {
    let dir = match primary.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = primary
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "tasks".to_string());
    let ext = primary
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (dir, stem, ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    #[test]
    fn test_backup_path_embeds_sortable_timestamp() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();

        let path = Archiver::backup_path(&primary, now);
        assert_eq!(path, dir.path().join("tasks_20260307T090501.json"));
    }

    #[test]
    fn test_backup_path_avoids_collisions() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        let now = Local.with_ymd_and_hms(2026, 3, 7, 9, 5, 1).unwrap();
        std::fs::write(dir.path().join("tasks_20260307T090501.json"), "{}").unwrap();

        let path = Archiver::backup_path(&primary, now);
        assert_eq!(path, dir.path().join("tasks_20260307T090501_1.json"));
    }

    #[test]
    fn test_archive_without_primary_is_noop() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");

        let result = Archiver::default().archive(&primary).unwrap();
        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_archive_copies_contents() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        std::fs::write(&primary, r#"{"tasks":[]}"#).unwrap();

        let backup = Archiver::default().archive(&primary).unwrap().unwrap();
        assert_eq!(std::fs::read_to_string(backup).unwrap(), r#"{"tasks":[]}"#);
    }

    #[test]
    fn test_rotate_keeps_newest() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        std::fs::write(&primary, "{}").unwrap();
        for stamp in ["20260101T000000", "20260102T000000", "20260103T000000"] {
            std::fs::write(dir.path().join(format!("tasks_{stamp}.json")), "{}").unwrap();
        }

        let deleted = Archiver::new(Some(2)).rotate(&primary).unwrap();
        assert_eq!(deleted, 1);

        let remaining = Archiver::list_backups(&primary).unwrap();
        assert_eq!(
            remaining,
            vec![
                dir.path().join("tasks_20260102T000000.json"),
                dir.path().join("tasks_20260103T000000.json"),
            ]
        );
        assert!(primary.exists());
    }

    #[test]
    fn test_list_backups_orders_suffixes_numerically() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        for name in [
            "tasks_20260307T090501_10.json",
            "tasks_20260307T090501_2.json",
            "tasks_20260307T090501.json",
            "tasks_20260307T090500.json",
        ] {
            std::fs::write(dir.path().join(name), "{}").unwrap();
        }

        let names: Vec<String> = Archiver::list_backups(&primary)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "tasks_20260307T090500.json",
                "tasks_20260307T090501.json",
                "tasks_20260307T090501_2.json",
                "tasks_20260307T090501_10.json",
            ]
        );
    }

    #[test]
    fn test_rotate_ignores_foreign_files() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        std::fs::write(dir.path().join("tasks_old.json"), "{}").unwrap();
        std::fs::write(dir.path().join("tasks_20260101T000000.json"), "{}").unwrap();
        std::fs::write(dir.path().join("tasks_20260102T000000.json"), "{}").unwrap();

        assert_eq!(Archiver::new(Some(1)).rotate(&primary).unwrap(), 1);
        assert!(dir.path().join("tasks_old.json").exists());
        assert!(dir.path().join("tasks_20260102T000000.json").exists());
        assert!(!dir.path().join("tasks_20260101T000000.json").exists());
    }

    #[test]
    fn test_rotate_without_limit_keeps_everything() {
        let dir = tempdir().unwrap();
        let primary = dir.path().join("tasks.json");
        std::fs::write(dir.path().join("tasks_20260101T000000.json"), "{}").unwrap();

        assert_eq!(Archiver::default().rotate(&primary).unwrap(), 0);
        assert_eq!(Archiver::list_backups(&primary).unwrap().len(), 1);
    }
}
