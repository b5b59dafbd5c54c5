use crate::{
    hash::{combine, leaf_hash},
    Address, AllowlistTreeError, Hasher, Keccak256Hasher, MerkleProof, NodeHash,
};

/// A Merkle tree built once over a finalized allowlist.
///
/// Layer 0 holds the leaves in input order; every further layer pairs
/// adjacent nodes under the sorted-pair rule, promoting an unpaired last
/// node unchanged. The tree is immutable after construction — an
/// allowlist update means building a new tree with a new root, never
/// mutating this one.
///
/// Leaf order matters: the same set of addresses in a different order can
/// produce a different root, so the allowlist's enumeration order must be
/// frozen before building.
#[derive(Debug, Clone)]
pub struct AllowlistTree<H: Hasher = Keccak256Hasher> {
    layers: Vec<Vec<NodeHash>>,
    hasher: H,
}

impl AllowlistTree<Keccak256Hasher> {
    /// Build a Keccak-256 tree from addresses, one leaf per entry in
    /// iteration order. Duplicate addresses stay duplicate leaves.
    pub fn from_addresses<I>(addresses: I) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        Self::from_addresses_with_hasher(addresses, Keccak256Hasher)
    }

    /// Build a Keccak-256 tree from precomputed leaves.
    pub fn from_leaves(leaves: Vec<NodeHash>) -> Self {
        Self::from_leaves_with_hasher(leaves, Keccak256Hasher)
    }
}

impl<H: Hasher> AllowlistTree<H> {
    /// Build a tree from addresses using the supplied hasher for both
    /// leaf encoding and pair combination.
    pub fn from_addresses_with_hasher<I>(addresses: I, hasher: H) -> Self
    where
        I: IntoIterator<Item = Address>,
    {
        let leaves = addresses
            .into_iter()
            .map(|addr| leaf_hash(&hasher, &addr))
            .collect();
        Self::from_leaves_with_hasher(leaves, hasher)
    }

    /// Build a tree from precomputed leaves using the supplied hasher.
    ///
    /// An empty leaf sequence is accepted here; the emptiness surfaces as
    /// [`AllowlistTreeError::EmptyTree`] from [`root`](Self::root) and
    /// proof generation, never as a sentinel root.
    pub fn from_leaves_with_hasher(leaves: Vec<NodeHash>, hasher: H) -> Self {
        let mut layers = vec![leaves];
        while layers.last().map_or(false, |layer| layer.len() > 1) {
            let layer = layers.last().map(Vec::as_slice).unwrap_or_default();
            let mut next = Vec::with_capacity(layer.len().div_ceil(2));
            for pair in layer.chunks(2) {
                match pair {
                    [left, right] => next.push(combine(&hasher, left, right)),
                    // Unpaired last node is promoted unchanged.
                    [lone] => next.push(*lone),
                    _ => unreachable!("chunks(2) yields 1 or 2 nodes"),
                }
            }
            layers.push(next);
        }
        Self { layers, hasher }
    }

    /// The published root: the single node of the topmost layer.
    pub fn root(&self) -> Result<NodeHash, AllowlistTreeError> {
        match self.layers.last().and_then(|layer| layer.first()) {
            Some(root) => Ok(*root),
            None => Err(AllowlistTreeError::EmptyTree),
        }
    }

    /// Leaves in input order.
    pub fn leaves(&self) -> &[NodeHash] {
        &self.layers[0]
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// Whether the tree was built with zero leaves.
    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Number of pairing layers above the leaves. A single-leaf tree has
    /// depth 0 (its root is the leaf itself).
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// Generate the inclusion proof for an address.
    ///
    /// Convenience over [`proof_for_leaf`](Self::proof_for_leaf) with
    /// `leaf = hash(address bytes)`.
    pub fn proof_for_address(&self, address: &Address) -> Result<MerkleProof, AllowlistTreeError> {
        self.proof_for_leaf(&leaf_hash(&self.hasher, address))
    }

    /// Generate the inclusion proof for a leaf value.
    ///
    /// If the leaf value occurs more than once (duplicate allowlist
    /// entries), the proof is generated for the lowest matching index.
    /// The proof holds one sibling per layer where the node on the path
    /// actually had one; a node promoted past an odd layer contributes
    /// nothing for that layer.
    pub fn proof_for_leaf(&self, leaf: &NodeHash) -> Result<MerkleProof, AllowlistTreeError> {
        if self.is_empty() {
            return Err(AllowlistTreeError::EmptyTree);
        }
        let mut index = self.layers[0]
            .iter()
            .position(|candidate| candidate == leaf)
            .ok_or(AllowlistTreeError::LeafNotFound)?;

        let mut siblings = Vec::with_capacity(self.depth());
        for layer in &self.layers[..self.depth()] {
            let sibling = index ^ 1;
            if sibling < layer.len() {
                siblings.push(layer[sibling]);
            }
            index /= 2;
        }
        Ok(MerkleProof::new(siblings))
    }
}
