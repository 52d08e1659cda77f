use anyhow::Result;
use std::path::Path;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Build { target } => crate::toolchain::run_build(target),
        crate::cli::Cmd::Print { target, json } => crate::toolchain::print_command(target, json),
        crate::cli::Cmd::Clean => crate::clean::clean(Path::new(".")),
        crate::cli::Cmd::Doctor => crate::doctor::run(),
    }
}
