//! # plugbuild
//!
//! Build driver for the CPLUG imgui example (Windows/MSVC).
//!
//! ## Usage
//!
//! ```bash
//! plugbuild build                      # Build the VST3 plugin container
//! plugbuild build --target standalone  # Build the standalone executable
//! plugbuild print                      # Show the cl command line (dry run)
//! plugbuild clean                      # Remove leftover .obj intermediates
//! plugbuild doctor                     # Check toolchain and example inputs
//! ```
//!
//! Run from the example directory with the MSVC environment set up
//! (an "x64 Native Tools Command Prompt", or `vcvars64.bat` sourced).

use anyhow::Result;
use clap::Parser;

mod app;
mod clean;
mod cli;
mod doctor;
mod plan;
mod toolchain;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();
    crate::app::run(cli)
}
