use std::{fs, path::PathBuf, process};

use allowlist_tree::{leaf_hash, parse_node_hash, Address, Keccak256Hasher, MerkleProof};
use anyhow::{Context, Result};
use clap::Parser;

use crate::common::ProofDocument;

#[derive(Parser, Debug)]
#[command(about = "Verify a proof against a published root, offline", long_about = None)]
pub struct Cli {
    /// Published Merkle root (hex)
    #[arg(short, long)]
    root: String,

    /// Claimed address
    #[arg(long)]
    address: String,

    /// Proof document produced by `prove`
    #[arg(short, long)]
    proof: PathBuf,
}

pub fn run(args: Cli) -> Result<()> {
    let root = parse_node_hash(&args.root).context("Invalid root")?;
    let address = Address::from_hex(&args.address).context("Invalid claim address")?;

    let content = fs::read_to_string(&args.proof)
        .with_context(|| format!("Failed to read proof file {:?}", args.proof))?;
    let document: ProofDocument =
        serde_json::from_str(&content).context("Failed to parse proof document")?;
    let proof =
        MerkleProof::from_hex_strings(&document.proof).context("Malformed proof siblings")?;

    let leaf = leaf_hash(&Keccak256Hasher, &address);
    if allowlist_tree::verify(&leaf, &proof, &root) {
        println!("VALID: {} is proven under root {}", address, args.root);
        Ok(())
    } else {
        // An expected outcome, not an input error: report and signal via
        // the exit code so shell pipelines can branch on it.
        println!("INVALID: proof does not tie {} to root {}", address, args.root);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use allowlist_tree::AllowlistTree;

    use super::*;

    #[test]
    fn test_verify_accepts_proof_document() {
        const CLAIMER: &str = "0x30145D714Db337606c8f520bee9a3e3eAC910636";
        let addresses: Vec<Address> = [
            "0x6F836d79dB63044BBD34BeA6E7E9E6004987A75E",
            CLAIMER,
            "0x2311C8A1C7A31694AdfF5E53A3dD5cd922d806Cb",
        ]
        .iter()
        .map(|s| Address::from_hex(s).expect("fixture address"))
        .collect();

        let tree = AllowlistTree::from_addresses(addresses.iter().copied());
        let root = tree.root().expect("root of 3-leaf tree");
        let proof = tree
            .proof_for_address(&addresses[1])
            .expect("proof for member");
        let document = ProofDocument {
            merkle_root: format!("0x{}", hex::encode(root)),
            address: addresses[1].to_string(),
            leaf_index: 1,
            proof: proof.to_hex_strings(),
        };

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("proof.json");
        let json = serde_json::to_string_pretty(&document).expect("serialize document");
        fs::write(&path, json).expect("write document");

        run(Cli {
            root: document.merkle_root.clone(),
            address: CLAIMER.to_string(),
            proof: path,
        })
        .expect("a genuine proof document should verify");
    }

    #[test]
    fn test_verify_rejects_malformed_root() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("proof.json");

        let result = run(Cli {
            root: "0x1234".to_string(),
            address: "0x30145D714Db337606c8f520bee9a3e3eAC910636".to_string(),
            proof: path,
        });
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid root"));
    }
}
