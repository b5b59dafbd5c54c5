use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::common::build_tree;

#[derive(Parser, Debug)]
#[command(about = "Compute the Merkle root of an allowlist file", long_about = None)]
pub struct Cli {
    /// Allowlist file: a JSON array of hex addresses
    #[arg(short, long)]
    allowlist: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let tree = build_tree(&args.allowlist)?;
    let root = tree
        .root()
        .context("Cannot publish a root for an empty allowlist")?;

    println!("0x{}", hex::encode(root));
    Ok(())
}
