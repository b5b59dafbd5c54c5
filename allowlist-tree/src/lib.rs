//! Sorted-pair Merkle tree over an address allowlist, using Keccak-256.
//!
//! Leaves are `keccak256(address bytes)`, one per allowlist entry, in the
//! order the allowlist enumerates them. Two sibling nodes `(a, b)` combine
//! into a parent as:
//!
//! `parent = keccak256(min(a, b) || max(a, b))`
//!
//! Sorting the pair before hashing makes a proof a plain ordered list of
//! sibling hashes with no left/right direction bits. An unpaired last node
//! in a layer is promoted to the next layer unchanged.
//!
//! The root is the value published to the external verifier (e.g. stored
//! in a contract); a proof plus the claimed address is everything the
//! verifier needs to recompute it.

#![warn(missing_docs)]

mod address;
mod error;
pub mod hash;
mod proof;
mod tree;
mod verify;


pub use address::Address;
pub use error::AllowlistTreeError;
pub use hash::{leaf_hash, Hasher, Keccak256Hasher, NodeHash};
pub use proof::{parse_node_hash, MerkleProof};
pub use tree::AllowlistTree;
pub use verify::{verify, verify_proof};
