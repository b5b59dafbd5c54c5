#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod common;
mod prove;
mod root;
mod verify;

#[derive(Parser, Debug)]
#[command(name = "allowlist")]
#[command(about = "Merkle allowlist tools: roots, claim proofs, offline verification", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the Merkle root of an allowlist file
    Root(root::Cli),
    /// Generate the inclusion proof for one allowlisted address
    Prove(prove::Cli),
    /// Verify a proof against a published root, offline
    Verify(verify::Cli),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Root(args) => root::run(args)?,
        Commands::Prove(args) => prove::run(args)?,
        Commands::Verify(args) => verify::run(args)?,
    }

    Ok(())
}
