use clap::{Parser, Subcommand};

use crate::plan::Target;

#[derive(Parser)]
#[command(name = "plugbuild")]
#[command(about = "Build driver for the CPLUG imgui example (MSVC)")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Compile and link the example, then remove intermediate .obj files.
    Build {
        #[arg(long, value_enum, default_value_t = Target::Vst3)]
        target: Target,
    },

    /// Print the cl command line without executing anything.
    Print {
        #[arg(long, value_enum, default_value_t = Target::Vst3)]
        target: Target,

        /// Emit the derived build plan as JSON instead of the command line.
        #[arg(long)]
        json: bool,
    },

    /// Remove intermediate .obj files from the working directory.
    Clean,

    /// Check that the MSVC toolchain and the example inputs are present.
    Doctor,
}
