use clap::Args;
use std::path::PathBuf;

use rom_cleaner::walker::{self, WalkOptions, WalkReport};

use super::CmdResult;
use crate::output;

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Directory to scan (searched recursively)
    pub directory: PathBuf,

    /// Apply the renames to disk (default is a dry run)
    #[arg(long)]
    pub force: bool,
}

impl CleanArgs {
    fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            execute: self.force,
            extensions: None,
        }
    }
}

pub fn run(args: CleanArgs) -> CmdResult<WalkReport> {
    let options = args.walk_options();

    output::print_line(&format!("Scanning: {}", args.directory.display()))?;

    let report = walker::process_directory(&args.directory, &options, output::print_record)?;

    Ok((report, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_flag_selects_execute_mode() {
        let args = CleanArgs {
            directory: PathBuf::from("roms"),
            force: true,
        };
        let options = args.walk_options();
        assert!(options.execute);
        assert!(options.extensions.is_none());
    }

    #[test]
    fn default_is_simulation() {
        let args = CleanArgs {
            directory: PathBuf::from("roms"),
            force: false,
        };
        assert!(!args.walk_options().execute);
    }
}
