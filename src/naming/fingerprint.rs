/// Content fingerprinting for post-wipe renaming
///
/// The fingerprint is SHA256 over the file's path string followed by the
/// full (already wiped) content, read in fixed-size chunks. The hex-encoded
/// digest becomes the file's new name, so nothing about the original name
/// survives on disk.
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::WipeError;

/// Chunk size for streaming file content into the hasher
const HASH_CHUNK_SIZE: usize = 1024;

/// Fingerprint a file using its own path as the name component
///
/// # Returns
/// 64 lowercase hex characters (SHA256)
pub fn fingerprint_file(path: &Path) -> Result<String, WipeError> {
    fingerprint_named(&path.to_string_lossy(), path)
}

/// Fingerprint the file at `path`, hashing `name` in place of its path
///
/// Split out from `fingerprint_file` so a fingerprint can be re-verified
/// after the file has been renamed: hash the original path string against
/// the content at the new location.
pub fn fingerprint_named(name: &str, path: &Path) -> Result<String, WipeError> {
    let hash_err = |source| WipeError::Hash {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(hash_err)?;

    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());

    let mut chunk = [0u8; HASH_CHUNK_SIZE];
    loop {
        let bytes_read = file.read(&mut chunk).map_err(hash_err)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&chunk[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fingerprint_format() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"wiped bytes").unwrap();
        temp_file.flush().unwrap();

        let fp = fingerprint_file(temp_file.path()).unwrap();

        // SHA256 hex: 64 lowercase hex characters
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(fp, fp.to_lowercase());

        // Same path and content: same fingerprint
        let fp2 = fingerprint_file(temp_file.path()).unwrap();
        assert_eq!(fp, fp2);
    }

    #[test]
    fn test_fingerprint_covers_path_and_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"some content").unwrap();
        temp_file.flush().unwrap();

        let fp = fingerprint_file(temp_file.path()).unwrap();

        // Manual digest over path string + content must match
        let mut hasher = Sha256::new();
        hasher.update(temp_file.path().to_string_lossy().as_bytes());
        hasher.update(b"some content");
        assert_eq!(fp, hex::encode(hasher.finalize()));
    }

    #[test]
    fn test_different_names_differ() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"identical content").unwrap();
        temp_file.flush().unwrap();

        let fp_a = fingerprint_named("/a/path", temp_file.path()).unwrap();
        let fp_b = fingerprint_named("/b/path", temp_file.path()).unwrap();
        assert_ne!(fp_a, fp_b);
    }

    #[test]
    fn test_multi_chunk_content() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = vec![0x5Au8; HASH_CHUNK_SIZE * 3 + 17];
        temp_file.write_all(&content).unwrap();
        temp_file.flush().unwrap();

        let fp = fingerprint_named("chunky", temp_file.path()).unwrap();

        let mut hasher = Sha256::new();
        hasher.update(b"chunky");
        hasher.update(&content);
        assert_eq!(fp, hex::encode(hasher.finalize()));
    }

    #[test]
    fn test_missing_file_is_hash_error() {
        let result = fingerprint_file(Path::new("/nonexistent/ghost"));
        assert!(matches!(result, Err(WipeError::Hash { .. })));
    }
}
