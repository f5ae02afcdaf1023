//! XXH64 content fingerprints over memory-mapped files.
//!
//! A fingerprint is a fast equality proxy: byte-identical files always
//! produce the same fingerprint, and distinct files collide only at the
//! hash's (non-cryptographic) collision rate. Each candidate file is
//! mapped into memory once and hashed as a whole buffer; the mapping and
//! the file handle are dropped on every exit path.

use std::fs::File;
use std::hash::Hasher as _;
use std::io::ErrorKind;
use std::path::Path;

use memmap2::Mmap;
use twox_hash::XxHash64;

use super::HashError;

/// 64-bit content fingerprint.
pub type Fingerprint = u64;

/// Seed for the fingerprint hash. Fixed so that fingerprints are stable
/// across runs and processes.
const FINGERPRINT_SEED: u64 = 0;

/// XXH64 of the empty byte sequence (seed 0).
///
/// All zero-length files are assigned this fingerprint directly; mapping
/// zero bytes is a degenerate mmap case and is never attempted.
pub const EMPTY_FINGERPRINT: Fingerprint = 0xef46_db37_51d8_e999;

/// Compute the fingerprint of an in-memory byte sequence.
#[must_use]
pub fn fingerprint_bytes(bytes: &[u8]) -> Fingerprint {
    let mut hasher = XxHash64::with_seed(FINGERPRINT_SEED);
    hasher.write(bytes);
    hasher.finish()
}

/// Format a fingerprint as a fixed-width hexadecimal string.
#[must_use]
pub fn fingerprint_to_hex(fingerprint: Fingerprint) -> String {
    format!("{fingerprint:016x}")
}

/// Compute the content fingerprint of a file by mapping it into memory.
///
/// Must not be called for zero-length files; use [`EMPTY_FINGERPRINT`]
/// instead.
///
/// # Errors
///
/// Returns [`HashError`] if the file cannot be opened or mapped. The file
/// handle and any established mapping are released before returning,
/// regardless of outcome.
pub fn fingerprint_file(path: &Path) -> Result<Fingerprint, HashError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HashError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => HashError::PermissionDenied(path.to_path_buf()),
        _ => HashError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    // Safety: the mapping is read-only and scoped to this function. A file
    // truncated by another process while mapped can fault the read; a scan
    // is a point-in-time snapshot and stale sizes are a documented risk.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| HashError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(fingerprint_bytes(&mmap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_empty_fingerprint_matches_hash_of_nothing() {
        assert_eq!(fingerprint_bytes(&[]), EMPTY_FINGERPRINT);
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        assert_eq!(fingerprint_bytes(b"hello"), fingerprint_bytes(b"hello"));
        assert_ne!(fingerprint_bytes(b"hello"), fingerprint_bytes(b"world"));
    }

    #[test]
    fn test_identical_files_share_fingerprint() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        std::fs::write(&a, b"same content").unwrap();
        std::fs::write(&b, b"same content").unwrap();

        assert_eq!(
            fingerprint_file(&a).unwrap(),
            fingerprint_file(&b).unwrap()
        );
    }

    #[test]
    fn test_different_files_differ() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        std::fs::write(&a, b"X").unwrap();
        std::fs::write(&b, b"Y").unwrap();

        assert_ne!(
            fingerprint_file(&a).unwrap(),
            fingerprint_file(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_matches_in_memory_hash() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.bin");
        let content = vec![0xA5u8; 64 * 1024];
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&content).unwrap();

        assert_eq!(
            fingerprint_file(&path).unwrap(),
            fingerprint_bytes(&content)
        );
    }

    #[test]
    fn test_missing_file_errors() {
        let result = fingerprint_file(Path::new("non_existent_file_12345.bin"));
        assert!(matches!(result, Err(HashError::NotFound(_))));
    }

    #[test]
    fn test_fingerprint_to_hex_is_fixed_width() {
        assert_eq!(fingerprint_to_hex(0x1), "0000000000000001");
        assert_eq!(fingerprint_to_hex(EMPTY_FINGERPRINT), "ef46db3751d8e999");
    }

    #[test]
    #[cfg(unix)]
    fn test_unreadable_file_errors() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("locked.bin");
        fs::write(&path, b"secret").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::File::open(&path).is_ok() {
            // Privileged user; permission bits do not bind.
            return;
        }

        let result = fingerprint_file(&path);
        assert!(matches!(result, Err(HashError::PermissionDenied(_))));
    }
}
