use std::process::ExitCode;

mod cli;
mod exits;
mod terminal;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    cli::run()
}
