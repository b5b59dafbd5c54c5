use std::{
    fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use allowlist_tree::{Address, AllowlistTree};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// The proof document emitted by `prove` and consumed by `verify`.
///
/// `proof` is the exact value an external verifier takes alongside the
/// claimed address: sibling hashes as hex strings, leaf-to-root order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProofDocument {
    pub merkle_root: String,
    pub address: String,
    pub leaf_index: usize,
    pub proof: Vec<String>,
}

/// Load an allowlist file: a JSON array of hex address strings.
pub fn load_allowlist(path: &Path) -> Result<Vec<Address>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read allowlist file {:?}", path))?;
    let entries: Vec<String> =
        serde_json::from_str(&content).context("Allowlist must be a JSON array of addresses")?;
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            Address::from_hex(entry)
                .with_context(|| format!("Invalid address at allowlist index {}", index))
        })
        .collect()
}

/// Load an allowlist and build its tree in one step.
pub fn build_tree(path: &Path) -> Result<AllowlistTree> {
    let addresses = load_allowlist(path)?;
    Ok(AllowlistTree::from_addresses(addresses))
}

/// Write `content` to `path` via a temp file and rename, so a crash never
/// leaves a half-written artifact behind.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    // "proof.json" -> "proof.json.tmp": the suffix is appended to the full
    // name, so sibling outputs differing only in extension get distinct
    // temp files.
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    fs::rename(&temp_path, path).context("Failed to move temp file into place")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use allowlist_tree::AllowlistTreeError;
    use assert_matches::assert_matches;

    use super::*;

    fn allowlist_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write fixture");
        file
    }

    #[test]
    fn test_load_allowlist() {
        let file = allowlist_file(
            r#"[
                "0x6F836d79dB63044BBD34BeA6E7E9E6004987A75E",
                "0x30145D714Db337606c8f520bee9a3e3eAC910636"
            ]"#,
        );
        let addresses = load_allowlist(file.path()).expect("load should succeed");
        assert_eq!(addresses.len(), 2);
        assert_eq!(
            addresses[0].to_string(),
            "0x6f836d79db63044bbd34bea6e7e9e6004987a75e"
        );
    }

    #[test]
    fn test_load_allowlist_rejects_bad_address() {
        let file = allowlist_file(r#"["0x1234"]"#);
        let result = load_allowlist(file.path());
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("index 0"));
        // The library's typed error passes through the context chain.
        assert_matches!(
            error.downcast_ref::<AllowlistTreeError>(),
            Some(AllowlistTreeError::InvalidAddressFormat(_))
        );
    }

    #[test]
    fn test_load_allowlist_rejects_non_array() {
        let file = allowlist_file(r#"{"addresses": []}"#);
        assert!(load_allowlist(file.path()).is_err());
    }

    #[test]
    fn test_build_tree_round_trips_members() {
        let file = allowlist_file(
            r#"[
                "0x6F836d79dB63044BBD34BeA6E7E9E6004987A75E",
                "0x30145D714Db337606c8f520bee9a3e3eAC910636",
                "0x2311C8A1C7A31694AdfF5E53A3dD5cd922d806Cb"
            ]"#,
        );
        let tree = build_tree(file.path()).expect("build should succeed");
        assert_eq!(tree.leaf_count(), 3);
        tree.root().expect("non-empty tree has a root");
    }

    #[test]
    fn test_write_file_atomic() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out.json");
        write_file_atomic(&path, "{}").expect("write should succeed");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "{}");
        assert!(!dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_file_atomic_temp_name_keeps_full_file_name() {
        // A sibling file that an extension-replacing temp name would
        // clobber must survive untouched.
        let dir = tempfile::tempdir().expect("create temp dir");
        let sibling = dir.path().join("proof.tmp");
        fs::write(&sibling, "unrelated").expect("write sibling");

        let json_path = dir.path().join("proof.json");
        write_file_atomic(&json_path, "json").expect("write json");

        assert_eq!(fs::read_to_string(&json_path).expect("read json"), "json");
        assert_eq!(
            fs::read_to_string(&sibling).expect("sibling still present"),
            "unrelated"
        );
        assert!(!dir.path().join("proof.json.tmp").exists());
    }
}
