use thiserror::Error;

/// Errors from allowlist tree operations.
///
/// A failed verification is not represented here: [`crate::verify`]
/// returns `false`, which is an expected outcome (forged proof, wrong
/// address), not a malformed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllowlistTreeError {
    /// The input could not be parsed to a 20-byte address.
    #[error("invalid address format: {0}")]
    InvalidAddressFormat(String),
    /// The input could not be parsed to a 32-byte hash.
    #[error("invalid hash format: {0}")]
    InvalidHashFormat(String),
    /// Root or proof requested from a tree built with zero leaves.
    #[error("tree has no leaves")]
    EmptyTree,
    /// Proof requested for a leaf absent from the tree.
    #[error("leaf is not present in the tree")]
    LeafNotFound,
}
