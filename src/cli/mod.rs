mod context;
mod flags;
mod prompts;
mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::{Context, Failure};
pub use flags::CliFlags;

/// Run CLI mode. Usage errors exit with 2 through clap.
pub fn run() -> ExitCode {
    let flags = CliFlags::parse();
    let mut ctx = Context::new(flags);

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Aborted) => ExitCode::SUCCESS,
        Err(Failure::Generate(_)) => ExitCode::FAILURE,
    }
}
