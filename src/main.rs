use std::process::ExitCode;

mod cli;
mod logging;

fn main() -> anyhow::Result<ExitCode> {
    logging::install();
    crate::cli::run()
}
