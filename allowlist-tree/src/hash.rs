//! Hash primitive and the sorted-pair combination rule.
//!
//! The hash function is an injected capability rather than a hard
//! dependency: the tree, proofs, and verification are generic over
//! [`Hasher`], with [`Keccak256Hasher`] as the default that matches the
//! reference allowlist scheme.

use sha3::{Digest, Keccak256};

use crate::Address;

/// A 32-byte node hash. Leaves and internal nodes share this type.
pub type NodeHash = [u8; 32];

/// A 32-byte cryptographic hash over arbitrary input.
pub trait Hasher {
    /// Hash `data` to 32 bytes. Must be pure and deterministic.
    fn hash(&self, data: &[u8]) -> NodeHash;
}

/// Keccak-256, the hash of the reference scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> NodeHash {
        Keccak256::digest(data).into()
    }
}

/// Compute the leaf for an allowlist entry: `hash(address bytes)`.
pub fn leaf_hash<H: Hasher>(hasher: &H, address: &Address) -> NodeHash {
    hasher.hash(address.as_bytes())
}

/// Combine two sibling nodes into their parent.
///
/// The pair is sorted by byte value before concatenation, so the parent
/// is identical whichever side each child was on. This is what lets a
/// proof omit left/right direction bits.
pub(crate) fn combine<H: Hasher>(hasher: &H, a: &NodeHash, b: &NodeHash) -> NodeHash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo);
    buf[32..].copy_from_slice(hi);
    hasher.hash(&buf)
}
