use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blockmap",
    version,
    about = "Map Minecraft block ids to coarse material categories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify every block and write the mapping table (default)
    Generate(GenerateArgs),
    /// Print a shape breakdown of the block list
    Analyze(AnalyzeArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Generate(GenerateArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Block list (minecraft-data blocks.json)
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Destination for the mapping JSON; overwritten
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
