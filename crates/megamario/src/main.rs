//! MegaMario binary

use clap::Parser;
use megamario::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    mario_engine::foundation::logging::init();

    let cli = Cli::parse();
    match megamario::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
