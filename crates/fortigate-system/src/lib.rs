//! System API client and the configuration backup workflow.
//!
//! Provides an asynchronous client for the appliance's `cmdb/system/` and
//! `monitor/system/` endpoints, plus a workflow that saves the running
//! configuration to a timestamped local file before changes are made.

#![deny(missing_docs)]

pub mod backup;
pub mod client;

pub use backup::{backup_file_name, pre_change_backup, resolve_backup_path, write_backup};
pub use client::{BackupScope, SystemClient};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = fortigate_core::Result<T>;
