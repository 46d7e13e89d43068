//! Directory walker — find ROM files with tagged names and rename them in place.
//!
//! Given a root directory and `WalkOptions`, this module:
//! 1. Walks every regular file below the root (sorted by name per directory)
//! 2. Drops files rejected by the optional extension filter
//! 3. Cleans each file name and checks the sibling target for collisions
//! 4. Renames on disk (execute mode) or only reports the plan (simulation)
//!
//! Every decision is handed to the caller as a `FileRecord` while the walk
//! runs, and collected into the returned `WalkReport`.

use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::extensions::ExtensionFilter;
use crate::names;

// ============================================================================
// Types
// ============================================================================

/// How a walk should run.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Rename files on disk. When false the walk only reports what it would do.
    pub execute: bool,
    /// Only consider files with these extensions. `None` means every file.
    pub extensions: Option<ExtensionFilter>,
}

impl WalkOptions {
    pub fn simulate() -> Self {
        Self::default()
    }

    pub fn execute() -> Self {
        Self {
            execute: true,
            extensions: None,
        }
    }

    pub fn with_extensions(mut self, filter: ExtensionFilter) -> Self {
        self.extensions = Some(filter);
        self
    }
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Renamed on disk.
    Renamed,
    /// Would be renamed; simulation mode.
    Simulated,
    /// Target name already taken; file left alone.
    Collision,
    /// Rename attempted (or entry read) and failed.
    Failed { error: String },
}

/// One reported decision.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Path relative to the walk root.
    pub file: String,
    /// Cleaned file name, when one could be computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregate result of a walk.
#[derive(Debug, Clone, Serialize)]
pub struct WalkReport {
    pub root: String,
    pub execute: bool,
    /// Files renamed (execute) or identified for renaming (simulation).
    pub changed: usize,
    pub renamed: usize,
    pub simulated: usize,
    pub collisions: usize,
    pub errors: usize,
    /// Files whose name was already clean.
    pub unchanged: usize,
    /// Files rejected by the extension filter.
    pub filtered: usize,
    pub records: Vec<FileRecord>,
}

impl WalkReport {
    fn new(root: &Path, execute: bool) -> Self {
        Self {
            root: root.display().to_string(),
            execute,
            changed: 0,
            renamed: 0,
            simulated: 0,
            collisions: 0,
            errors: 0,
            unchanged: 0,
            filtered: 0,
            records: Vec::new(),
        }
    }

    fn record<F: FnMut(&FileRecord)>(&mut self, record: FileRecord, on_record: &mut F) {
        match record.outcome {
            Outcome::Renamed => {
                self.renamed += 1;
                self.changed += 1;
            }
            Outcome::Simulated => {
                self.simulated += 1;
                self.changed += 1;
            }
            Outcome::Collision => self.collisions += 1,
            Outcome::Failed { .. } => self.errors += 1,
        }

        on_record(&record);
        self.records.push(record);
    }
}

// ============================================================================
// Walk
// ============================================================================

/// Clean every file name under `root`.
///
/// Only a missing (or non-directory) root is an error. Per-file problems are
/// reported through `on_record` as `Outcome::Failed` and the walk continues.
pub fn process_directory<F>(
    root: &Path,
    options: &WalkOptions,
    mut on_record: F,
) -> Result<WalkReport>
where
    F: FnMut(&FileRecord),
{
    if !root.exists() {
        return Err(Error::root_not_found(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "directory",
            "Path is not a directory",
            Some(root.display().to_string()),
        ));
    }

    let mut report = WalkReport::new(root, options.execute);
    // Targets handed out during this walk, and (simulation only) sources that
    // a planned rename has moved away. Together they stand in for the disk
    // state execute mode would see.
    let mut claimed: HashSet<PathBuf> = HashSet::new();
    let mut vacated: HashSet<PathBuf> = HashSet::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let file = err
                    .path()
                    .map(|p| relative_display(root, p))
                    .unwrap_or_else(|| root.display().to_string());
                report.record(
                    FileRecord {
                        file,
                        new_name: None,
                        outcome: Outcome::Failed {
                            error: err.to_string(),
                        },
                    },
                    &mut on_record,
                );
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(filter) = &options.extensions {
            if !filter.allows(path) {
                report.filtered += 1;
                continue;
            }
        }

        let file = relative_display(root, path);

        let Some(original) = entry.file_name().to_str() else {
            report.record(
                FileRecord {
                    file,
                    new_name: None,
                    outcome: Outcome::Failed {
                        error: "File name is not valid UTF-8".to_string(),
                    },
                },
                &mut on_record,
            );
            continue;
        };

        let new_name = names::clean_filename(original);
        if new_name == original {
            report.unchanged += 1;
            continue;
        }

        // An empty name resolves to the containing directory, which always exists.
        let target = if new_name.is_empty() {
            path.parent().unwrap_or(root).to_path_buf()
        } else {
            path.with_file_name(&new_name)
        };
        let occupied =
            claimed.contains(&target) || (target_exists(&target) && !vacated.contains(&target));
        let outcome = if occupied {
            Outcome::Collision
        } else if options.execute {
            match std::fs::rename(path, &target) {
                Ok(()) => {
                    claimed.insert(target);
                    Outcome::Renamed
                }
                Err(e) => Outcome::Failed {
                    error: e.to_string(),
                },
            }
        } else {
            claimed.insert(target);
            vacated.insert(path.to_path_buf());
            Outcome::Simulated
        };

        report.record(
            FileRecord {
                file,
                new_name: Some(new_name),
                outcome,
            },
            &mut on_record,
        );
    }

    if report.filtered > 0 {
        crate::log_status!(
            "walk",
            "{} file(s) skipped by the extension filter",
            report.filtered
        );
    }

    Ok(report)
}

/// A dangling symlink still occupies the name, so check without following.
fn target_exists(target: &Path) -> bool {
    target.symlink_metadata().is_ok()
}

fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

// ============================================================================
// Tests
// ============================================================================
