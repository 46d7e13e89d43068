//! CLI report formatting and output.
//!
//! Provides per-file decision lines, the summary block, error rendering and
//! exit code mapping.

use rom_cleaner::{Error, ErrorCode, FileRecord, Outcome, Result, WalkReport};
use serde_json::Value;
use std::io::{self, Write};

pub fn format_record(record: &FileRecord) -> String {
    let new_name = record.new_name.as_deref().unwrap_or_default();
    match &record.outcome {
        Outcome::Renamed => format!("[RENAMED] {}  -->  {}", record.file, new_name),
        Outcome::Simulated => format!("[DRY RUN] {}  -->  {}", record.file, new_name),
        Outcome::Collision => format!(
            "[SKIPPED] {}  -->  {} (target already exists)",
            record.file, new_name
        ),
        Outcome::Failed { error } => format!("[ERROR] {}: {}", record.file, error),
    }
}

pub fn format_summary(report: &WalkReport) -> Vec<String> {
    let mut lines = Vec::new();

    if report.changed == 0 {
        lines.push("No files to clean found.".to_string());
    } else {
        let action = if report.execute {
            "renamed"
        } else {
            "identified for renaming"
        };
        lines.push(format!(
            "--- Summary: {} file(s) {} ---",
            report.changed, action
        ));
    }

    if report.collisions > 0 || report.errors > 0 {
        lines.push(format!(
            "{} skipped (target exists), {} error(s)",
            report.collisions, report.errors
        ));
    }

    if !report.execute && report.changed > 0 {
        lines.push("Run again with --force to apply these changes.".to_string());
    }

    lines
}

pub fn format_error(err: &Error) -> Vec<String> {
    let mut lines = vec![format!("Error: {}", err.message)];

    if let Value::Object(details) = &err.details {
        for (key, value) in details {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            lines.push(format!("  {}: {}", key, rendered));
        }
    }

    for hint in &err.hints {
        lines.push(format!("  hint: {}", hint.message));
    }

    lines
}

fn write_lines(handle: &mut impl Write, lines: &[String], target: &str) -> Result<()> {
    for line in lines {
        if let Err(e) = writeln!(handle, "{}", line) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                return Ok(()); // Exit gracefully on SIGPIPE
            }
            return Err(Error::internal_io(
                e.to_string(),
                Some(format!("write {}", target)),
            ));
        }
    }
    Ok(())
}

pub fn print_line(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_lines(&mut handle, &[line.to_string()], "stdout")
}

/// Walk callback. A failed write must not stop the walk, so errors are dropped.
pub fn print_record(record: &FileRecord) {
    let _ = print_line(&format_record(record));
}

pub fn print_summary(report: &WalkReport) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_lines(&mut handle, &format_summary(report), "stdout")
}

pub fn print_error(err: &Error) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = write_lines(&mut handle, &format_error(err), "stderr");
}

/// Print a command result and map it to a process exit code.
pub fn print_cmd_result(result: Result<(WalkReport, i32)>) -> i32 {
    match result {
        Ok((report, exit_code)) => match print_summary(&report) {
            Ok(()) => exit_code,
            Err(err) => {
                print_error(&err);
                exit_code_for_error(err.code)
            }
        },
        Err(err) => {
            print_error(&err);
            exit_code_for_error(err.code)
        }
    }
}

pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,

        ErrorCode::DirectoryNotFound => 4,

        ErrorCode::InternalIoError => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(outcome: Outcome) -> FileRecord {
        FileRecord {
            file: "snes/Game (USA).sfc".to_string(),
            new_name: Some("Game.sfc".to_string()),
            outcome,
        }
    }

    fn report(execute: bool, changed: usize, collisions: usize, errors: usize) -> WalkReport {
        WalkReport {
            root: "roms".to_string(),
            execute,
            changed,
            renamed: if execute { changed } else { 0 },
            simulated: if execute { 0 } else { changed },
            collisions,
            errors,
            unchanged: 0,
            filtered: 0,
            records: Vec::new(),
        }
    }

    #[test]
    fn record_lines_name_file_and_outcome() {
        assert_eq!(
            format_record(&record(Outcome::Simulated)),
            "[DRY RUN] snes/Game (USA).sfc  -->  Game.sfc"
        );
        assert_eq!(
            format_record(&record(Outcome::Renamed)),
            "[RENAMED] snes/Game (USA).sfc  -->  Game.sfc"
        );
        assert_eq!(
            format_record(&record(Outcome::Collision)),
            "[SKIPPED] snes/Game (USA).sfc  -->  Game.sfc (target already exists)"
        );
        assert_eq!(
            format_record(&record(Outcome::Failed {
                error: "Permission denied (os error 13)".to_string()
            })),
            "[ERROR] snes/Game (USA).sfc: Permission denied (os error 13)"
        );
    }

    #[test]
    fn zero_changes_gets_its_own_message() {
        let lines = format_summary(&report(true, 0, 0, 0));
        assert_eq!(lines, vec!["No files to clean found."]);
    }

    #[test]
    fn summary_wording_follows_mode() {
        let lines = format_summary(&report(true, 3, 0, 0));
        assert_eq!(lines, vec!["--- Summary: 3 file(s) renamed ---"]);

        let lines = format_summary(&report(false, 2, 0, 0));
        assert_eq!(lines[0], "--- Summary: 2 file(s) identified for renaming ---");
        assert!(lines[1].contains("--force"));
    }

    #[test]
    fn summary_mentions_skips_and_errors() {
        let lines = format_summary(&report(true, 1, 2, 1));
        assert!(lines.contains(&"2 skipped (target exists), 1 error(s)".to_string()));
    }

    #[test]
    fn error_lines_include_details_and_hints() {
        let err = Error::root_not_found("/missing");
        let lines = format_error(&err);
        assert_eq!(lines[0], "Error: Directory not found: /missing");
        assert!(lines.contains(&"  path: /missing".to_string()));
        assert!(lines.contains(&"  hint: Check the path and try again".to_string()));
    }

    #[test]
    fn exit_codes_by_error_kind() {
        assert_eq!(exit_code_for_error(ErrorCode::DirectoryNotFound), 4);
        assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
        assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    }

    #[test]
    fn write_lines_stops_quietly_on_broken_pipe() {
        struct BrokenPipe;
        impl Write for BrokenPipe {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = write_lines(&mut BrokenPipe, &["line".to_string()], "stdout");
        assert!(result.is_ok());
    }
}
