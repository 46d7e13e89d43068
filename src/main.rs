use clap::Parser;

mod commands;
mod output;

use commands::clean;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "rom-cleaner")]
#[command(version = VERSION)]
#[command(about = "Strip region, revision and version tags from ROM file names")]
struct Cli {
    #[command(flatten)]
    clean: clean::CleanArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let exit_code = commands::run(cli.clean);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
