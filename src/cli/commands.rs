// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `convert` and `inspect`, and
// their flags. Every flag has a default, so both commands run
// without arguments.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::convert_use_case::{
    ConvertConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a SemEval'14 XML corpus into a labeled-examples artifact
    Convert(ConvertArgs),

    /// Summarise an existing labeled-examples artifact
    Inspect(InspectArgs),
}

/// All arguments for the `convert` command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// SemEval'14 Task 4 XML file (aspectCategories schema)
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Output artifact; an existing file is replaced
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// The application layer never sees clap types
impl From<ConvertArgs> for ConvertConfig {
    fn from(a: ConvertArgs) -> Self {
        ConvertConfig {
            input_path:  a.input,
            output_path: a.output,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Artifact written by `convert`
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub path: PathBuf,

    /// Number of groups to print as JSON
    #[arg(long, default_value_t = 3)]
    pub show: usize,
}
