use crate::{AllowlistTreeError, NodeHash};

/// An inclusion proof: the ordered sibling hashes from a leaf's layer up
/// to the root.
///
/// Under the sorted-pair rule no direction bits are needed; the verifier
/// simply folds each sibling into an accumulator. The published artifact
/// form is a list of hex strings (the exact value handed to an external
/// verifier), so conversion both ways is provided here.
///
/// The sibling list is not publicly constructible; proofs come from
/// [`AllowlistTree::proof_for_leaf`](crate::AllowlistTree::proof_for_leaf)
/// or from decoding a published hex form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof {
    siblings: Vec<NodeHash>,
}

impl MerkleProof {
    pub(crate) fn new(siblings: Vec<NodeHash>) -> Self {
        Self { siblings }
    }

    /// Sibling hashes in leaf-to-root order.
    pub fn siblings(&self) -> &[NodeHash] {
        &self.siblings
    }

    /// Number of siblings. A single-leaf tree yields a length of 0.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the proof carries no siblings (single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    /// Encode as `0x`-prefixed hex strings, leaf-to-root order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.siblings
            .iter()
            .map(|sibling| format!("0x{}", hex::encode(sibling)))
            .collect()
    }

    /// Decode from hex strings (with or without `0x` prefix).
    pub fn from_hex_strings<I, S>(strings: I) -> Result<Self, AllowlistTreeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let siblings = strings
            .into_iter()
            .map(|s| parse_node_hash(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { siblings })
    }
}

/// Parse a 32-byte hash from hex text, with or without a `0x` prefix.
///
/// Used for proof siblings and for published roots read back from their
/// text form.
pub fn parse_node_hash(text: &str) -> Result<NodeHash, AllowlistTreeError> {
    let trimmed = text.trim();
    let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if cleaned.len() != 64 {
        return Err(AllowlistTreeError::InvalidHashFormat(format!(
            "expected 64 hex chars, got {}",
            cleaned.len()
        )));
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut bytes)
        .map_err(|e| AllowlistTreeError::InvalidHashFormat(e.to_string()))?;
    Ok(bytes)
}
