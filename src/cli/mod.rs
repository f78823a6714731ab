// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to the use cases.
// This is the only layer that prints to stdout.
//
//   absa-dataset                 → convert with the default paths
//   absa-dataset convert [...]   → convert with explicit paths
//   absa-dataset inspect [...]   → summarise an artifact
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ConvertArgs, InspectArgs};

use crate::application::convert_use_case::{save_dataset, ConversionReport};

#[derive(Parser, Debug)]
#[command(
    name = "absa-dataset",
    version,
    about = "Turn SemEval'14 aspect-category XML into a dataset of labeled examples."
)]
pub struct Cli {
    /// Subcommand to run; without one, `convert` runs on the default paths
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Convert(args)) => run_convert(args),
            Some(Commands::Inspect(args)) => run_inspect(args),
            None => {
                let report = save_dataset()?;
                print_conversion(&report);
                Ok(())
            }
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    use crate::application::convert_use_case::ConvertUseCase;

    let report = ConvertUseCase::new(args.into()).execute()?;
    print_conversion(&report);
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(args.path, args.show).execute()?;

    println!("Groups:   {}", report.groups);
    println!("Examples: {}", report.examples);
    for (sentiment, count) in &report.sentiments {
        println!("  {sentiment:<8} {count}");
    }
    if !report.preview.is_empty() {
        println!("\nFirst {} groups:\n{}", report.preview.len(), report.preview_json()?);
    }
    Ok(())
}

fn print_conversion(report: &ConversionReport) {
    println!("Sentences read:     {}", report.sentences_read);
    println!("Groups written:     {}", report.groups_written);
    println!("Examples written:   {}", report.examples_written);
    println!("Conflicts dropped:  {}", report.stats.conflicts);
    println!("Sentences rejected: {}", report.stats.rejected);
}
