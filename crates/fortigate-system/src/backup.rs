//! Saving the running configuration to a timestamped local file.
//!
//! File names follow `{hostname}_{YYYYMMDD}_{HHMM}.conf`. If a file with
//! that name already exists (a second backup within the same minute, such
//! as a post-change backup after a pre-change one), the name gains a
//! `_POST` suffix instead of overwriting the first capture.

use crate::client::{BackupScope, SystemClient};
use crate::Result;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::info;

/// Backup file name for a hostname and timestamp.
#[must_use]
pub fn backup_file_name(hostname: &str, timestamp: DateTime<Local>) -> String {
    format!("{hostname}_{}.conf", timestamp.format("%Y%m%d_%H%M"))
}

/// Resolve the path a backup should be written to, avoiding collisions.
#[must_use]
pub fn resolve_backup_path(dir: &Path, hostname: &str, timestamp: DateTime<Local>) -> PathBuf {
    let primary = dir.join(backup_file_name(hostname, timestamp));
    if primary.exists() {
        dir.join(format!(
            "{hostname}_{}_POST.conf",
            timestamp.format("%Y%m%d_%H%M")
        ))
    } else {
        primary
    }
}

/// Write a configuration snapshot to a timestamped file under `dir`.
///
/// # Errors
///
/// Returns [`fortigate_core::Error::Io`] if the file cannot be written.
pub fn write_backup(dir: &Path, hostname: &str, contents: &str) -> Result<PathBuf> {
    let path = resolve_backup_path(dir, hostname, Local::now());
    std::fs::write(&path, contents)?;
    info!(
        path = %path.display(),
        bytes = contents.len(),
        "wrote configuration backup"
    );
    Ok(path)
}

/// Take a full configuration backup before making changes.
///
/// Fetches the appliance hostname, downloads the running configuration,
/// and writes it under `dir`. Any failure propagates to the caller so no
/// further operations are performed without a safety copy.
///
/// # Errors
///
/// Returns an error if the hostname or configuration cannot be fetched,
/// or the backup file cannot be written.
pub async fn pre_change_backup(client: &SystemClient, dir: &Path) -> Result<PathBuf> {
    let hostname = client.hostname().await?;
    let config = client.config_backup(BackupScope::Global).await?;
    write_backup(dir, &hostname, &config)
}
