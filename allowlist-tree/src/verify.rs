//! Proof verification.
//!
//! Pure function, no tree required: recomputes the root from
//! `(leaf, proof)` with the same sorted-pair rule used during
//! construction and compares to the expected root. An external verifier
//! (e.g. a contract holding the published root) must run this exact
//! algorithm; a position-aware variant would reject every proof this
//! crate generates, silently.

use crate::{hash::combine, Hasher, Keccak256Hasher, MerkleProof, NodeHash};

/// Verify `proof` ties `leaf` to `root` under the supplied hasher.
///
/// `false` is an expected outcome (forged proof, wrong address, stale
/// root), not an error. An empty proof verifies iff `leaf == root`,
/// which is exactly the single-leaf tree case.
pub fn verify_proof<H: Hasher>(
    hasher: &H,
    leaf: &NodeHash,
    proof: &MerkleProof,
    root: &NodeHash,
) -> bool {
    let mut acc = *leaf;
    for sibling in proof.siblings() {
        acc = combine(hasher, &acc, sibling);
    }
    acc == *root
}

/// [`verify_proof`] with the reference Keccak-256 hasher.
pub fn verify(leaf: &NodeHash, proof: &MerkleProof, root: &NodeHash) -> bool {
    verify_proof(&Keccak256Hasher, leaf, proof, root)
}
