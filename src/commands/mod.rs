pub mod clean;

pub type CmdResult<T> = rom_cleaner::Result<(T, i32)>;

/// Run the clean command and print its outcome. Returns the process exit code.
pub(crate) fn run(args: clean::CleanArgs) -> i32 {
    let result = clean::run(args);
    crate::output::print_cmd_result(result)
}
