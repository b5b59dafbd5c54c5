use std::path::PathBuf;

use allowlist_tree::{leaf_hash, Address, Keccak256Hasher};
use anyhow::{Context, Result};
use clap::Parser;

use crate::common::{build_tree, write_file_atomic, ProofDocument};

#[derive(Parser, Debug)]
#[command(about = "Generate the inclusion proof for one allowlisted address", long_about = None)]
pub struct Cli {
    /// Allowlist file: a JSON array of hex addresses
    #[arg(short, long)]
    allowlist: PathBuf,

    /// Address to prove membership for
    #[arg(long)]
    address: String,

    /// Output file for the proof document; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: Cli) -> Result<()> {
    let address = Address::from_hex(&args.address).context("Invalid claim address")?;

    let tree = build_tree(&args.allowlist)?;
    let root = tree
        .root()
        .context("Cannot prove membership in an empty allowlist")?;

    // Fails fast here for outsiders, before any downstream claim is issued.
    let proof = tree
        .proof_for_address(&address)
        .context("Address is not on the allowlist")?;

    let leaf = leaf_hash(&Keccak256Hasher, &address);
    let leaf_index = tree
        .leaves()
        .iter()
        .position(|candidate| candidate == &leaf)
        .context("Leaf disappeared between proof and index lookup")?;

    let document = ProofDocument {
        merkle_root: format!("0x{}", hex::encode(root)),
        address: address.to_string(),
        leaf_index,
        proof: proof.to_hex_strings(),
    };
    let json = serde_json::to_string_pretty(&document).context("Failed to serialize proof")?;

    match args.output {
        Some(path) => {
            write_file_atomic(&path, &json)?;
            println!("Proof written to {:?} ({} siblings)", path, proof.len());
        }
        None => println!("{}", json),
    }

    Ok(())
}
